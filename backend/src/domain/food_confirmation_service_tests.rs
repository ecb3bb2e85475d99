//! Tests for the food confirmation service.

use std::sync::Arc;

use chrono::Utc;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    ConfirmationLogPersistenceError, MockConfirmationLogRepository, MockFoodRepository,
    MockSensitivityRepository, MockUserRepository,
};
use crate::domain::{
    ConfirmationLog, ConfirmationLogId, ContentName, ErrorCode, Food, FoodContent, FoodContentId,
    FoodName, FullName, ImageRef, PhoneNumber, User,
};

type Service = FoodConfirmationService<
    MockUserRepository,
    MockFoodRepository,
    MockSensitivityRepository,
    MockConfirmationLogRepository,
>;

fn content(id: i64, name: &str) -> FoodContent {
    FoodContent::new(
        FoodContentId::new(id).expect("valid id"),
        ContentName::new(name).expect("valid name"),
    )
}

#[fixture]
fn user_id() -> UserId {
    UserId::new(1).expect("valid id")
}

#[fixture]
fn pizza() -> Food {
    Food {
        id: FoodId::new(10).expect("valid id"),
        name: FoodName::new("Pizza").expect("valid name"),
        image: ImageRef::new("foods/pizza.jpg").expect("valid image"),
        contents: vec![
            FoodContentId::new(1).expect("valid id"),
            FoodContentId::new(2).expect("valid id"),
        ],
    }
}

fn known_user(user_id: UserId) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(move |_| {
        Ok(Some(User::new(
            user_id,
            FullName::new("Alice").expect("valid name"),
            PhoneNumber::new("555-0100").expect("valid phone"),
        )))
    });
    users
}

fn foods_returning(food: Option<Food>) -> MockFoodRepository {
    let mut foods = MockFoodRepository::new();
    foods
        .expect_find_food()
        .times(1)
        .return_once(move |_| Ok(food));
    foods
}

fn sensitivities_returning(contents: Vec<FoodContent>) -> MockSensitivityRepository {
    let mut sensitivities = MockSensitivityRepository::new();
    sensitivities
        .expect_contents_for_user()
        .times(1)
        .return_once(move |_| Ok(contents));
    sensitivities
}

fn echoing_logs() -> MockConfirmationLogRepository {
    let mut logs = MockConfirmationLogRepository::new();
    logs.expect_append().times(1).return_once(|entry| {
        Ok(ConfirmationLog {
            id: ConfirmationLogId::new(100).expect("valid id"),
            user_id: entry.user_id(),
            food_id: entry.food_id(),
            confirmed_at: Utc::now(),
            result: entry.result(),
            sensitive_contents: entry.sensitive_content_ids().to_vec(),
        })
    });
    logs
}

fn make_service(
    users: MockUserRepository,
    foods: MockFoodRepository,
    sensitivities: MockSensitivityRepository,
    logs: MockConfirmationLogRepository,
) -> Service {
    FoodConfirmationService::new(ConfirmationStores {
        users: Arc::new(users),
        foods: Arc::new(foods),
        sensitivities: Arc::new(sensitivities),
        logs: Arc::new(logs),
    })
}

#[rstest]
#[tokio::test]
async fn unsafe_food_logs_only_the_intersection(user_id: UserId, pizza: Food) {
    let food_id = pizza.id;
    let service = make_service(
        known_user(user_id),
        foods_returning(Some(pizza)),
        sensitivities_returning(vec![content(1, "gluten"), content(5, "nuts")]),
        echoing_logs(),
    );

    let outcome = service.confirm(user_id, food_id).await.expect("evaluated");
    assert!(!outcome.result());
    assert_eq!(outcome.sensitive_contents, vec![content(1, "gluten")]);
    assert_eq!(
        outcome.log.sensitive_contents,
        vec![FoodContentId::new(1).expect("valid id")]
    );
}

#[rstest]
#[tokio::test]
async fn safe_food_logs_positive_result(user_id: UserId, pizza: Food) {
    let food_id = pizza.id;
    let service = make_service(
        known_user(user_id),
        foods_returning(Some(pizza)),
        sensitivities_returning(Vec::new()),
        echoing_logs(),
    );

    let outcome = service.confirm(user_id, food_id).await.expect("evaluated");
    assert!(outcome.result());
    assert!(outcome.sensitive_contents.is_empty());
    assert!(outcome.log.sensitive_contents.is_empty());
}

#[rstest]
#[tokio::test]
async fn unknown_user_is_not_found_and_nothing_is_logged(user_id: UserId) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));
    let mut logs = MockConfirmationLogRepository::new();
    logs.expect_append().never();

    let service = make_service(
        users,
        MockFoodRepository::new(),
        MockSensitivityRepository::new(),
        logs,
    );
    let error = service
        .confirm(user_id, FoodId::new(10).expect("valid id"))
        .await
        .expect_err("unknown user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn unknown_food_is_not_found_and_nothing_is_logged(user_id: UserId) {
    let mut logs = MockConfirmationLogRepository::new();
    logs.expect_append().never();

    let service = make_service(
        known_user(user_id),
        foods_returning(None),
        MockSensitivityRepository::new(),
        logs,
    );
    let error = service
        .confirm(user_id, FoodId::new(77).expect("valid id"))
        .await
        .expect_err("unknown food");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn log_failures_surface_as_errors(user_id: UserId, pizza: Food) {
    let food_id = pizza.id;
    let mut logs = MockConfirmationLogRepository::new();
    logs.expect_append()
        .times(1)
        .return_once(|_| Err(ConfirmationLogPersistenceError::connection("down")));

    let service = make_service(
        known_user(user_id),
        foods_returning(Some(pizza)),
        sensitivities_returning(Vec::new()),
        logs,
    );
    let error = service
        .confirm(user_id, food_id)
        .await
        .expect_err("log failure");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
