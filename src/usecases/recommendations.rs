use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::users::User;
use crate::usecases::{engagements, relationships, users};
use hashbrown::HashSet;
use tracing::debug;

pub async fn fetch_recommendations<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<User>> {
    let requester = users::fetch_one(ctx, user_id).await?;
    let friend_ids = relationships::fetch_friend_ids(ctx, user_id).await?;
    let engaged = engagements::fetch_engaged_user_ids(ctx).await?;
    let population = users::fetch_all(ctx).await?;

    let recommendations = select_candidates(&requester, population, &friend_ids, &engaged);
    debug!(
        user_id,
        friends = friend_ids.len(),
        engaged = engaged.len(),
        recommended = recommendations.len(),
        "Computed friend recommendations"
    );
    Ok(recommendations)
}

/// Keeps the users that are neither the requester nor one of their friends,
/// have engaged with some post, and share at least one profile attribute
/// with the requester. Population order is preserved.
pub fn select_candidates(
    requester: &User,
    population: Vec<User>,
    friend_ids: &HashSet<i64>,
    engaged: &HashSet<i64>,
) -> Vec<User> {
    population
        .into_iter()
        .filter(|candidate| {
            candidate.id != requester.id
                && !friend_ids.contains(&candidate.id)
                && engaged.contains(&candidate.id)
                && shares_attribute(requester, candidate)
        })
        .collect()
}

fn shares_attribute(requester: &User, candidate: &User) -> bool {
    attribute_matches(&candidate.interest, &requester.interest)
        || attribute_matches(&candidate.school, &requester.school)
        || attribute_matches(&candidate.major, &requester.major)
}

/// Case-sensitive containment of the requester's value, like
/// `LIKE '%value%'`. A blank requester value is contained in everything.
fn attribute_matches(candidate_value: &str, requester_value: &str) -> bool {
    candidate_value.contains(requester_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, interest: &str, school: &str, major: &str) -> User {
        User {
            id,
            name: format!("user {id}"),
            interest: interest.to_owned(),
            school: school.to_owned(),
            major: major.to_owned(),
        }
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|user| user.id).collect()
    }

    fn campus() -> Vec<User> {
        vec![
            user(1, "chess", "MIT", "CS"),
            user(2, "painting", "MIT", "Art"),
            user(3, "rowing", "Yale", "History"),
            user(4, "chess", "Harvard", "Law"),
            user(5, "chess club", "Stanford", "EE"),
        ]
    }

    #[test]
    fn recommends_engaged_user_with_shared_interest() {
        let requester = user(1, "chess", "MIT", "CS");
        let engaged = HashSet::from([1, 5]);
        let recommended = select_candidates(&requester, campus(), &HashSet::new(), &engaged);
        assert_eq!(ids(&recommended), [5]);
        assert_eq!(recommended[0].interest, "chess club");
    }

    #[test]
    fn friends_and_requester_are_never_recommended() {
        let requester = user(1, "chess", "MIT", "CS");
        let engaged = HashSet::from([1, 2, 3, 4, 5]);
        let friend_ids = HashSet::from([4]);
        let recommended = select_candidates(&requester, campus(), &friend_ids, &engaged);
        assert_eq!(ids(&recommended), [2, 5]);
        assert!(!recommended.iter().any(|u| u.id == 1 || friend_ids.contains(&u.id)));
    }

    #[test]
    fn engagement_alone_is_not_enough() {
        let requester = user(1, "chess", "MIT", "CS");
        let engaged = HashSet::from([3]);
        assert!(select_candidates(&requester, campus(), &HashSet::new(), &engaged).is_empty());
    }

    #[test]
    fn attributes_alone_are_not_enough() {
        let requester = user(1, "chess", "MIT", "CS");
        assert!(select_candidates(&requester, campus(), &HashSet::new(), &HashSet::new()).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive_containment() {
        let requester = user(1, "Chess", "Oxford", "Physics");
        let engaged = HashSet::from([4, 5]);
        assert!(select_candidates(&requester, campus(), &HashSet::new(), &engaged).is_empty());

        let requester = user(1, "Go", "Stan", "Biology");
        assert_eq!(
            ids(&select_candidates(&requester, campus(), &HashSet::new(), &engaged)),
            [5]
        );
    }

    #[test]
    fn blank_requester_attribute_matches_every_engaged_candidate() {
        let requester = user(1, "", "MIT", "CS");
        let population = vec![requester.clone(), user(2, "chess", "Yale", "EE")];
        let engaged = HashSet::from([2]);
        let recommended = select_candidates(&requester, population, &HashSet::new(), &engaged);
        assert_eq!(ids(&recommended), [2]);

        let requester = user(1, "", "", "");
        let engaged = HashSet::from([1, 2, 3, 4, 5]);
        let friend_ids = HashSet::from([3]);
        assert_eq!(
            ids(&select_candidates(&requester, campus(), &friend_ids, &engaged)),
            [2, 4, 5]
        );
    }

    #[test]
    fn adding_the_recommended_user_as_friend_clears_the_recommendation() {
        let requester = user(1, "chess", "MIT", "CS");
        let engaged = HashSet::from([1, 5]);
        let mut friend_ids = HashSet::new();
        assert_eq!(
            ids(&select_candidates(&requester, campus(), &friend_ids, &engaged)),
            [5]
        );

        friend_ids.insert(5);
        assert!(select_candidates(&requester, campus(), &friend_ids, &engaged).is_empty());
    }
}
