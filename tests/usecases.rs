mod common;

use friends_service::api::RequestContext;
use friends_service::common::error::AppError;
use friends_service::usecases::relationships;

#[tokio::test]
async fn adding_yourself_fails_without_touching_storage() {
    let state = common::offline_state();
    let ctx = RequestContext::from(&state);
    for user_id in [1, 42, -3] {
        let error = relationships::add_friend(&ctx, user_id, user_id)
            .await
            .unwrap_err();
        assert_eq!(error, AppError::FriendsSelfReference);
    }
}

#[tokio::test]
async fn listing_friends_of_a_null_user_is_a_validation_error() {
    let state = common::offline_state();
    let ctx = RequestContext::from(&state);
    for user_id in ["", "null", "not-a-number"] {
        let error = relationships::fetch_friends(&ctx, user_id)
            .await
            .unwrap_err();
        assert_eq!(error, AppError::FriendsInvalidUserId, "{user_id:?}");
    }
}

#[tokio::test]
async fn storage_failures_surface_as_unexpected() {
    let state = common::offline_state();
    let ctx = RequestContext::from(&state);
    let error = relationships::remove_friend(&ctx, 1, 5).await.unwrap_err();
    assert_eq!(error, AppError::Unexpected);
}
