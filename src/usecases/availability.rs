use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::users::User;
use crate::usecases::{relationships, users};
use hashbrown::HashSet;

/// Everyone who is not already a friend of the requester. The requester is
/// part of the result; hiding them is up to the caller.
pub fn available(population: Vec<User>, friend_ids: &HashSet<i64>) -> Vec<User> {
    population
        .into_iter()
        .filter(|user| !friend_ids.contains(&user.id))
        .collect()
}

pub async fn fetch_available<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<User>> {
    let friend_ids = relationships::fetch_friend_ids(ctx, user_id).await?;
    let population = users::fetch_all(ctx).await?;
    Ok(available(population, &friend_ids))
}
