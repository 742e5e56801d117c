use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{OtpCodeRepository, SessionTokenRepository, UserRepository};
use crate::domain::types::{
    DEFAULT_OFFICE, SESSION_TOKEN_LEN, SESSION_TTL_DAYS, SessionToken, User, UserRole,
};
use crate::error::ApiError;

/// Charset for session tokens (lowercase hex).
const TOKEN_CHARSET: &[u8] = b"0123456789abcdef";

fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..SESSION_TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

// ── VerifyCode (login) ───────────────────────────────────────────────────────

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyCodeOutput {
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct VerifyCodeUseCase<C, U, S>
where
    C: OtpCodeRepository,
    U: UserRepository,
    S: SessionTokenRepository,
{
    pub codes: C,
    pub users: U,
    pub sessions: S,
    /// Email granted the admin role at provisioning time.
    pub admin_email: Option<String>,
}

impl<C, U, S> VerifyCodeUseCase<C, U, S>
where
    C: OtpCodeRepository,
    U: UserRepository,
    S: SessionTokenRepository,
{
    pub async fn execute(&self, input: VerifyCodeInput) -> Result<VerifyCodeOutput, ApiError> {
        // 1. Exact (email, code) match, newest unused row → 401 if none
        let code = self
            .codes
            .find_latest(&input.email, &input.code)
            .await?
            .ok_or(ApiError::InvalidCode)?;

        let now = Utc::now();
        if code.is_expired(now) {
            return Err(ApiError::ExpiredCode);
        }

        // 2. Single-use claim. Losing the race reads the same as an unknown
        //    code to the second caller.
        if !self.codes.mark_used(code.id).await? {
            return Err(ApiError::InvalidCode);
        }

        // 3. Resolve or provision the user
        let role = match &self.admin_email {
            Some(admin) if *admin == input.email => UserRole::Admin,
            _ => UserRole::Member,
        };
        let user = self
            .users
            .find_or_create(&User {
                id: Uuid::now_v7(),
                email: input.email.clone(),
                office: DEFAULT_OFFICE.to_owned(),
                role,
                created_at: now,
            })
            .await?;

        // 4. Mint the session token
        let session = SessionToken {
            id: Uuid::now_v7(),
            user_id: user.id,
            token: generate_token(),
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
            created_at: now,
        };
        self.sessions.create(&session).await?;

        Ok(VerifyCodeOutput {
            user_id: user.id,
            token: session.token,
            expires_at: session.expires_at,
        })
    }
}

// ── Authenticate (session guard) ─────────────────────────────────────────────

pub struct AuthenticateUseCase<S: SessionTokenRepository> {
    pub sessions: S,
}

impl<S: SessionTokenRepository> AuthenticateUseCase<S> {
    /// Resolve a presented token to its owning user id. Read-only; the
    /// session's expiry is never extended.
    pub async fn execute(&self, token: &str) -> Result<Uuid, ApiError> {
        let session = self
            .sessions
            .find_live(token)
            .await?
            .ok_or(ApiError::SessionExpired)?;
        Ok(session.user_id)
    }
}
