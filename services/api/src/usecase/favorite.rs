use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::FavoriteRepository;
use crate::domain::types::Favorite;
use crate::error::ApiError;

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> AddFavoriteUseCase<F> {
    pub async fn execute(&self, user_id: Uuid, notice_id: i32) -> Result<(), ApiError> {
        let favorite = Favorite {
            user_id,
            notice_id,
            created_at: Utc::now(),
        };
        self.favorites.add(&favorite).await
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    pub async fn execute(&self, user_id: Uuid, notice_id: i32) -> Result<(), ApiError> {
        self.favorites.remove(user_id, notice_id).await
    }
}
