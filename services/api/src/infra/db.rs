use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use eers_api_schema::{favorites, login_tokens, memos, notices, otp_codes, users};

use crate::domain::repository::{
    FavoriteRepository, MemoRepository, NoticeRepository, OtpCodeRepository,
    SessionTokenRepository, UserRepository,
};
use crate::domain::types::{Favorite, Memo, Notice, OtpCode, SessionToken, User, UserRole};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_or_create(&self, user: &User) -> Result<User, ApiError> {
        // Insert-or-skip on the email unique key, then re-select whichever row
        // won. Two concurrent logins for a new address both land on one row.
        users::Entity::insert(users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            office: Set(user.office.clone()),
            role: Set(user.role.as_i16()),
            created_at: Set(user.created_at),
        })
        .on_conflict(
            OnConflict::column(users::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert user")?;

        let model = users::Entity::find()
            .filter(users::Column::Email.eq(&user.email))
            .one(&self.db)
            .await
            .context("find user by email")?
            .ok_or_else(|| anyhow::anyhow!("user row missing after upsert: {}", user.email))?;
        user_from_model(model)
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = UserRole::from_i16(model.role)
        .ok_or_else(|| anyhow::anyhow!("user {} has unknown role {}", model.id, model.role))?;
    Ok(User {
        id: model.id,
        email: model.email,
        office: model.office,
        role,
        created_at: model.created_at,
    })
}

// ── Sign-in code repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpCodeRepository {
    pub db: DatabaseConnection,
}

impl OtpCodeRepository for DbOtpCodeRepository {
    async fn create(&self, code: &OtpCode) -> Result<(), ApiError> {
        otp_codes::ActiveModel {
            id: Set(code.id),
            email: Set(code.email.clone()),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            used_at: Set(code.used_at),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("create sign-in code")?;
        Ok(())
    }

    async fn find_latest(&self, email: &str, code: &str) -> Result<Option<OtpCode>, ApiError> {
        let model = otp_codes::Entity::find()
            .filter(otp_codes::Column::Email.eq(email))
            .filter(otp_codes::Column::Code.eq(code))
            .filter(otp_codes::Column::UsedAt.is_null())
            .order_by_desc(otp_codes::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find latest sign-in code")?;
        Ok(model.map(otp_code_from_model))
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError> {
        // The used_at IS NULL filter makes this a compare-and-set: of two
        // racing logins replaying one code, exactly one sees rows_affected 1.
        let result = otp_codes::Entity::update_many()
            .col_expr(otp_codes::Column::UsedAt, Expr::value(Utc::now()))
            .filter(otp_codes::Column::Id.eq(id))
            .filter(otp_codes::Column::UsedAt.is_null())
            .exec(&self.db)
            .await
            .context("mark sign-in code used")?;
        Ok(result.rows_affected > 0)
    }
}

fn otp_code_from_model(model: otp_codes::Model) -> OtpCode {
    OtpCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        used_at: model.used_at,
        created_at: model.created_at,
    }
}

// ── Session token repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionTokenRepository {
    pub db: DatabaseConnection,
}

impl SessionTokenRepository for DbSessionTokenRepository {
    async fn create(&self, session: &SessionToken) -> Result<(), ApiError> {
        login_tokens::ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token: Set(session.token.clone()),
            expires_at: Set(session.expires_at),
            created_at: Set(session.created_at),
        }
        .insert(&self.db)
        .await
        .context("create session token")?;
        Ok(())
    }

    async fn find_live(&self, token: &str) -> Result<Option<SessionToken>, ApiError> {
        let model = login_tokens::Entity::find()
            .filter(login_tokens::Column::Token.eq(token))
            .filter(login_tokens::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.db)
            .await
            .context("find live session token")?;
        Ok(model.map(session_from_model))
    }
}

fn session_from_model(model: login_tokens::Model) -> SessionToken {
    SessionToken {
        id: model.id,
        user_id: model.user_id,
        token: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Notice repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNoticeRepository {
    pub db: DatabaseConnection,
}

impl NoticeRepository for DbNoticeRepository {
    async fn list_recent(&self, limit: u64) -> Result<Vec<Notice>, ApiError> {
        let models = notices::Entity::find()
            .order_by_desc(notices::Column::NoticeDate)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent notices")?;
        Ok(models.into_iter().map(notice_from_model).collect())
    }
}

fn notice_from_model(model: notices::Model) -> Notice {
    Notice {
        id: model.id,
        title: model.title,
        client: model.client,
        notice_date: model.notice_date,
        detail_link: model.detail_link,
        office: model.office,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn add(&self, favorite: &Favorite) -> Result<(), ApiError> {
        favorites::Entity::insert(favorites::ActiveModel {
            user_id: Set(favorite.user_id),
            notice_id: Set(favorite.notice_id),
            created_at: Set(favorite.created_at),
        })
        .on_conflict(
            OnConflict::columns([favorites::Column::UserId, favorites::Column::NoticeId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("add favorite")?;
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, notice_id: i32) -> Result<(), ApiError> {
        favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(favorites::Column::NoticeId.eq(notice_id))
            .exec(&self.db)
            .await
            .context("remove favorite")?;
        Ok(())
    }
}

// ── Memo repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMemoRepository {
    pub db: DatabaseConnection,
}

impl MemoRepository for DbMemoRepository {
    async fn append(&self, memo: &Memo) -> Result<(), ApiError> {
        memos::ActiveModel {
            id: Set(memo.id),
            user_id: Set(memo.user_id),
            notice_id: Set(memo.notice_id),
            body: Set(memo.body.clone()),
            created_at: Set(memo.created_at),
        }
        .insert(&self.db)
        .await
        .context("append memo")?;
        Ok(())
    }
}
