use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{Mailer, OtpCodeRepository};
use crate::domain::types::{OTP_CODE_LEN, OTP_CODE_TTL_SECS, OtpCode};
use crate::error::ApiError;

/// Charset for generated sign-in codes (uppercase alphanumeric). Collisions
/// across emails are fine: verification matches on (email, code) together.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub struct RequestCodeInput {
    pub email: String,
}

pub struct RequestCodeUseCase<C, M>
where
    C: OtpCodeRepository,
    M: Mailer,
{
    pub codes: C,
    pub mailer: M,
}

impl<C, M> RequestCodeUseCase<C, M>
where
    C: OtpCodeRepository,
    M: Mailer,
{
    pub async fn execute(&self, input: RequestCodeInput) -> Result<(), ApiError> {
        // 1. Generate and persist the code. History is append-only; earlier
        //    codes for the same address stay untouched.
        let code_str = generate_code();
        let now = Utc::now();
        let code = OtpCode {
            id: Uuid::now_v7(),
            email: input.email.clone(),
            code: code_str.clone(),
            expires_at: now + Duration::seconds(OTP_CODE_TTL_SECS),
            used_at: None,
            created_at: now,
        };
        self.codes.create(&code).await?;

        // 2. Deliver after the commit. A relay failure surfaces to the caller;
        //    the stored row was never seen by anyone and lapses on its own.
        let body = format!("Your EERS sign-in code: {code_str}\nIt expires in 5 minutes.");
        self.mailer
            .send(&input.email, "EERS sign-in code", &body)
            .await?;
        Ok(())
    }
}
