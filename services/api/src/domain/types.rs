use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User permission level.
///
/// Stored as a smallint (0 = member, 1 = admin). Admin unlocks the
/// collector trigger; everything else is open to any authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member = 0,
    Admin = 1,
}

impl UserRole {
    /// Convert from the stored smallint. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Member),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to the stored smallint.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

/// User account. Provisioned on first successful code verification and
/// never deleted by this service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub office: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// One-time sign-in code bound to an email address.
#[derive(Debug, Clone)]
pub struct OtpCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Opaque session token. Fixed 30-day lifetime, never refreshed.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Procurement notice, populated by the external collector service.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub client: String,
    pub notice_date: DateTime<Utc>,
    pub detail_link: String,
    pub office: String,
}

/// A user's bookmark on a notice.
#[derive(Debug, Clone)]
pub struct Favorite {
    pub user_id: Uuid,
    pub notice_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Free-text note on a notice. Append-only.
#[derive(Debug, Clone)]
pub struct Memo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notice_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Sign-in code length in characters.
pub const OTP_CODE_LEN: usize = 6;

/// Sign-in code time-to-live in seconds (5 minutes).
pub const OTP_CODE_TTL_SECS: i64 = 300;

/// Session token length in lowercase hex characters (128 bits of entropy).
pub const SESSION_TOKEN_LEN: usize = 32;

/// Session lifetime in days, fixed at mint time.
pub const SESSION_TTL_DAYS: i64 = 30;

/// Upper bound on the notice listing.
pub const NOTICE_LIST_LIMIT: u64 = 300;

/// Office assigned to new users until an admin sorts them.
pub const DEFAULT_OFFICE: &str = "unassigned";
