#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Favorite, Memo, Notice, OtpCode, SessionToken, User};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;

    /// Insert the given user unless a row with its email already exists, then
    /// return whichever row owns the email. Race-safe: unique index plus
    /// ON CONFLICT DO NOTHING, never check-then-insert.
    async fn find_or_create(&self, user: &User) -> Result<User, ApiError>;
}

/// Repository for one-time sign-in codes.
pub trait OtpCodeRepository: Send + Sync {
    /// Append a new code row. Existing rows are never overwritten or deleted.
    async fn create(&self, code: &OtpCode) -> Result<(), ApiError>;

    /// Most recently created unused code matching exactly (email, code).
    /// Expiry is not filtered here, so the caller can tell a stale code from
    /// an unknown one.
    async fn find_latest(&self, email: &str, code: &str) -> Result<Option<OtpCode>, ApiError>;

    /// Atomically claim a code (set `used_at` where still null). Returns
    /// `false` when another verification got there first.
    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for session tokens.
pub trait SessionTokenRepository: Send + Sync {
    async fn create(&self, session: &SessionToken) -> Result<(), ApiError>;

    /// Find by exact token string where `expires_at > now`.
    async fn find_live(&self, token: &str) -> Result<Option<SessionToken>, ApiError>;
}

/// Read-only access to the collector-populated notices table.
pub trait NoticeRepository: Send + Sync {
    /// Up to `limit` notices, most recent notice date first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Notice>, ApiError>;
}

/// Repository for notice bookmarks. Both operations are idempotent.
pub trait FavoriteRepository: Send + Sync {
    async fn add(&self, favorite: &Favorite) -> Result<(), ApiError>;

    async fn remove(&self, user_id: Uuid, notice_id: i32) -> Result<(), ApiError>;
}

/// Repository for notice memos.
pub trait MemoRepository: Send + Sync {
    async fn append(&self, memo: &Memo) -> Result<(), ApiError>;
}

/// Outbound transactional email.
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError>;
}

/// Trigger for the external data-ingestion service.
pub trait CollectorRunner: Send + Sync {
    /// Ask the collector service to run every collector once and wait for
    /// its outcome.
    async fn run_all(&self) -> Result<(), ApiError>;
}
