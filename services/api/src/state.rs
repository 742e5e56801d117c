use sea_orm::DatabaseConnection;

use crate::infra::collector::HttpCollectorRunner;
use crate::infra::db::{
    DbFavoriteRepository, DbMemoRepository, DbNoticeRepository, DbOtpCodeRepository,
    DbSessionTokenRepository, DbUserRepository,
};
use crate::infra::mailer::AppMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: AppMailer,
    pub collectors: HttpCollectorRunner,
    pub admin_email: Option<String>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_code_repo(&self) -> DbOtpCodeRepository {
        DbOtpCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionTokenRepository {
        DbSessionTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn notice_repo(&self) -> DbNoticeRepository {
        DbNoticeRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn memo_repo(&self) -> DbMemoRepository {
        DbMemoRepository {
            db: self.db.clone(),
        }
    }
}
