use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use eers_api::domain::repository::{
    CollectorRunner, FavoriteRepository, Mailer, MemoRepository, NoticeRepository,
    OtpCodeRepository, SessionTokenRepository, UserRepository,
};
use eers_api::domain::types::{
    DEFAULT_OFFICE, Favorite, Memo, Notice, OtpCode, SessionToken, User, UserRole,
};
use eers_api::error::ApiError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_or_create(&self, user: &User) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.email == user.email) {
            return Ok(existing.clone());
        }
        users.push(user.clone());
        Ok(user.clone())
    }
}

// ── MockOtpCodeRepo ──────────────────────────────────────────────────────────

pub struct MockOtpCodeRepo {
    pub codes: Arc<Mutex<Vec<OtpCode>>>,
}

impl MockOtpCodeRepo {
    pub fn new(codes: Vec<OtpCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<OtpCode>>> {
        Arc::clone(&self.codes)
    }
}

impl OtpCodeRepository for MockOtpCodeRepo {
    async fn create(&self, code: &OtpCode) -> Result<(), ApiError> {
        self.codes.lock().unwrap().push(code.clone());
        Ok(())
    }

    async fn find_latest(&self, email: &str, code: &str) -> Result<Option<OtpCode>, ApiError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.email == email && c.code == code && c.used_at.is_none())
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut codes = self.codes.lock().unwrap();
        match codes.iter_mut().find(|c| c.id == id && c.used_at.is_none()) {
            Some(c) => {
                c.used_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockSessionRepo ──────────────────────────────────────────────────────────

pub struct MockSessionRepo {
    pub sessions: Arc<Mutex<Vec<SessionToken>>>,
}

impl MockSessionRepo {
    pub fn new(sessions: Vec<SessionToken>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal session list for post-execution inspection.
    pub fn sessions_handle(&self) -> Arc<Mutex<Vec<SessionToken>>> {
        Arc::clone(&self.sessions)
    }
}

impl SessionTokenRepository for MockSessionRepo {
    async fn create(&self, session: &SessionToken) -> Result<(), ApiError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_live(&self, token: &str) -> Result<Option<SessionToken>, ApiError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token == token && s.expires_at > now)
            .cloned())
    }
}

// ── MockNoticeRepo ───────────────────────────────────────────────────────────

pub struct MockNoticeRepo {
    pub notices: Vec<Notice>,
    pub requested_limit: Arc<Mutex<Option<u64>>>,
}

impl MockNoticeRepo {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self {
            notices,
            requested_limit: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a shared handle recording the limit the use case asked for.
    pub fn limit_handle(&self) -> Arc<Mutex<Option<u64>>> {
        Arc::clone(&self.requested_limit)
    }
}

impl NoticeRepository for MockNoticeRepo {
    async fn list_recent(&self, limit: u64) -> Result<Vec<Notice>, ApiError> {
        *self.requested_limit.lock().unwrap() = Some(limit);
        let mut notices = self.notices.clone();
        notices.sort_by(|a, b| b.notice_date.cmp(&a.notice_date));
        notices.truncate(limit as usize);
        Ok(notices)
    }
}

// ── MockFavoriteRepo ─────────────────────────────────────────────────────────

pub struct MockFavoriteRepo {
    pub favorites: Arc<Mutex<Vec<Favorite>>>,
}

impl MockFavoriteRepo {
    pub fn empty() -> Self {
        Self {
            favorites: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the internal favorite list for post-execution inspection.
    pub fn favorites_handle(&self) -> Arc<Mutex<Vec<Favorite>>> {
        Arc::clone(&self.favorites)
    }
}

impl FavoriteRepository for MockFavoriteRepo {
    async fn add(&self, favorite: &Favorite) -> Result<(), ApiError> {
        let mut favorites = self.favorites.lock().unwrap();
        // Same semantics as the composite-key ON CONFLICT DO NOTHING insert.
        if !favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.notice_id == favorite.notice_id)
        {
            favorites.push(favorite.clone());
        }
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, notice_id: i32) -> Result<(), ApiError> {
        self.favorites
            .lock()
            .unwrap()
            .retain(|f| !(f.user_id == user_id && f.notice_id == notice_id));
        Ok(())
    }
}

// ── MockMemoRepo ─────────────────────────────────────────────────────────────

pub struct MockMemoRepo {
    pub memos: Arc<Mutex<Vec<Memo>>>,
}

impl MockMemoRepo {
    pub fn empty() -> Self {
        Self {
            memos: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the internal memo list for post-execution inspection.
    pub fn memos_handle(&self) -> Arc<Mutex<Vec<Memo>>> {
        Arc::clone(&self.memos)
    }
}

impl MemoRepository for MockMemoRepo {
    async fn append(&self, memo: &Memo) -> Result<(), ApiError> {
        self.memos.lock().unwrap().push(memo.clone());
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn ok() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    /// Returns a shared handle to the sent-mail list for post-execution inspection.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        if self.fail {
            return Err(ApiError::DeliveryFailed(anyhow::anyhow!(
                "mock relay refused the message"
            )));
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

// ── MockCollectorRunner ──────────────────────────────────────────────────────

pub struct MockCollectorRunner {
    pub runs: Arc<Mutex<u32>>,
    pub fail: bool,
}

impl MockCollectorRunner {
    pub fn ok() -> Self {
        Self {
            runs: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            runs: Arc::new(Mutex::new(0)),
            fail: true,
        }
    }

    /// Returns a shared handle to the run counter for post-execution inspection.
    pub fn runs_handle(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.runs)
    }
}

impl CollectorRunner for MockCollectorRunner {
    async fn run_all(&self) -> Result<(), ApiError> {
        if self.fail {
            return Err(ApiError::CollectorFailed(anyhow::anyhow!(
                "mock collector is down"
            )));
        }
        *self.runs.lock().unwrap() += 1;
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "user@example.com".to_owned(),
        office: DEFAULT_OFFICE.to_owned(),
        role: UserRole::Member,
        created_at: Utc::now(),
    }
}

pub fn test_admin() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        email: "admin@example.com".to_owned(),
        office: DEFAULT_OFFICE.to_owned(),
        role: UserRole::Admin,
        created_at: Utc::now(),
    }
}

pub fn test_otp_code(email: &str) -> OtpCode {
    OtpCode {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        code: "ABC123".to_owned(),
        expires_at: Utc::now() + Duration::seconds(300),
        used_at: None,
        created_at: Utc::now(),
    }
}

pub fn test_session(user_id: Uuid, token: &str) -> SessionToken {
    SessionToken {
        id: Uuid::now_v7(),
        user_id,
        token: token.to_owned(),
        expires_at: Utc::now() + Duration::days(30),
        created_at: Utc::now(),
    }
}

pub fn test_notice(id: i32, notice_date: chrono::DateTime<Utc>) -> Notice {
    Notice {
        id,
        title: format!("Notice {id}"),
        client: "City of Example".to_owned(),
        notice_date,
        detail_link: format!("https://procurement.example.com/notices/{id}"),
        office: "unassigned".to_owned(),
    }
}
