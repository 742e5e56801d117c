use uuid::Uuid;

use eers_api::error::ApiError;
use eers_api::usecase::collect::RunCollectorsUseCase;

use crate::helpers::{MockCollectorRunner, MockUserRepo, test_admin, test_user};

#[tokio::test]
async fn should_run_collectors_once_for_admin() {
    let admin = test_admin();
    let runner = MockCollectorRunner::ok();
    let runs_handle = runner.runs_handle();

    let uc = RunCollectorsUseCase {
        users: MockUserRepo::new(vec![admin.clone()]),
        collectors: runner,
    };

    uc.execute(admin.id).await.unwrap();

    assert_eq!(*runs_handle.lock().unwrap(), 1, "expected exactly one run");
}

#[tokio::test]
async fn should_forbid_member_without_invoking_collector() {
    let member = test_user();
    let runner = MockCollectorRunner::ok();
    let runs_handle = runner.runs_handle();

    let uc = RunCollectorsUseCase {
        users: MockUserRepo::new(vec![member.clone()]),
        collectors: runner,
    };

    let result = uc.execute(member.id).await;

    assert!(
        matches!(result, Err(ApiError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
    assert_eq!(
        *runs_handle.lock().unwrap(),
        0,
        "collector must not run for a member"
    );
}

#[tokio::test]
async fn should_treat_vanished_user_as_invalid_session() {
    let uc = RunCollectorsUseCase {
        users: MockUserRepo::empty(),
        collectors: MockCollectorRunner::ok(),
    };

    let result = uc.execute(Uuid::now_v7()).await;

    assert!(
        matches!(result, Err(ApiError::SessionExpired)),
        "expected SessionExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_surface_collector_failure_as_structured_error() {
    let admin = test_admin();

    let uc = RunCollectorsUseCase {
        users: MockUserRepo::new(vec![admin.clone()]),
        collectors: MockCollectorRunner::failing(),
    };

    let result = uc.execute(admin.id).await;

    assert!(
        matches!(result, Err(ApiError::CollectorFailed(_))),
        "expected CollectorFailed, got {result:?}"
    );
}
