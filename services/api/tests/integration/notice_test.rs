use chrono::{Duration, Utc};

use eers_api::domain::types::NOTICE_LIST_LIMIT;
use eers_api::usecase::notice::ListNoticesUseCase;

use crate::helpers::{MockNoticeRepo, test_notice};

#[tokio::test]
async fn should_list_notices_most_recent_first() {
    let now = Utc::now();
    let repo = MockNoticeRepo::new(vec![
        test_notice(1, now - Duration::days(3)),
        test_notice(2, now - Duration::days(1)),
        test_notice(3, now - Duration::days(2)),
    ]);

    let uc = ListNoticesUseCase { notices: repo };
    let notices = uc.execute().await.unwrap();

    let ids: Vec<i32> = notices.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 3, 1], "newest notice date should come first");
}

#[tokio::test]
async fn should_cap_listing_at_configured_limit() {
    let repo = MockNoticeRepo::new(vec![]);
    let limit_handle = repo.limit_handle();

    let uc = ListNoticesUseCase { notices: repo };
    uc.execute().await.unwrap();

    assert_eq!(
        *limit_handle.lock().unwrap(),
        Some(NOTICE_LIST_LIMIT),
        "listing must ask the store for at most {NOTICE_LIST_LIMIT} rows"
    );
}
