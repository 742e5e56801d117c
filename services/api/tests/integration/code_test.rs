use chrono::{Duration, Utc};

use eers_api::error::ApiError;
use eers_api::usecase::code::{RequestCodeInput, RequestCodeUseCase};

use crate::helpers::{MockMailer, MockOtpCodeRepo, test_otp_code};

#[tokio::test]
async fn should_persist_six_char_code_and_mail_it() {
    let mock_repo = MockOtpCodeRepo::empty();
    let codes_handle = mock_repo.codes_handle();
    let mailer = MockMailer::ok();
    let sent_handle = mailer.sent_handle();

    let uc = RequestCodeUseCase {
        codes: mock_repo,
        mailer,
    };

    uc.execute(RequestCodeInput {
        email: "a@x.com".to_owned(),
    })
    .await
    .unwrap();

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1, "expected exactly one code to be created");

    let created = &codes[0];
    assert_eq!(created.email, "a@x.com");
    assert_eq!(created.code.len(), 6, "sign-in code should be 6 characters");
    assert!(
        created
            .code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        "code should be uppercase alphanumeric, got {:?}",
        created.code
    );
    assert!(created.used_at.is_none(), "new code should not be used");
    assert!(
        created.expires_at > Utc::now() + Duration::seconds(290)
            && created.expires_at < Utc::now() + Duration::seconds(310),
        "code should expire about five minutes out, got {:?}",
        created.expires_at
    );

    // The mail carries the exact generated code to the requested address.
    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1, "expected exactly one mail send");
    assert_eq!(sent[0].to, "a@x.com");
    assert!(
        sent[0].body.contains(&created.code),
        "mail body should contain the code"
    );
}

#[tokio::test]
async fn should_append_new_code_without_touching_history() {
    let earlier = test_otp_code("a@x.com");
    let earlier_id = earlier.id;

    let mock_repo = MockOtpCodeRepo::new(vec![earlier]);
    let codes_handle = mock_repo.codes_handle();

    let uc = RequestCodeUseCase {
        codes: mock_repo,
        mailer: MockMailer::ok(),
    };

    uc.execute(RequestCodeInput {
        email: "a@x.com".to_owned(),
    })
    .await
    .unwrap();

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 2, "existing code rows must never be replaced");
    assert!(
        codes.iter().any(|c| c.id == earlier_id && c.used_at.is_none()),
        "the earlier code should survive untouched"
    );
}

#[tokio::test]
async fn should_surface_delivery_failure_and_keep_code_row() {
    let mock_repo = MockOtpCodeRepo::empty();
    let codes_handle = mock_repo.codes_handle();

    let uc = RequestCodeUseCase {
        codes: mock_repo,
        mailer: MockMailer::failing(),
    };

    let result = uc
        .execute(RequestCodeInput {
            email: "a@x.com".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::DeliveryFailed(_))),
        "expected DeliveryFailed, got {result:?}"
    );

    // The code was committed before the send, so the row stays. It was never
    // delivered and lapses when its window closes.
    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1, "committed code row should be kept");
}
