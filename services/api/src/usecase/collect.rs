use uuid::Uuid;

use crate::domain::repository::{CollectorRunner, UserRepository};
use crate::domain::types::UserRole;
use crate::error::ApiError;

pub struct RunCollectorsUseCase<U, R>
where
    U: UserRepository,
    R: CollectorRunner,
{
    pub users: U,
    pub collectors: R,
}

impl<U, R> RunCollectorsUseCase<U, R>
where
    U: UserRepository,
    R: CollectorRunner,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        // A session whose user row has vanished counts as an invalid session.
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::SessionExpired)?;

        if user.role != UserRole::Admin {
            return Err(ApiError::Forbidden);
        }

        self.collectors.run_all().await
    }
}
