use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::MemoRepository;
use crate::domain::types::Memo;
use crate::error::ApiError;

pub struct CreateMemoInput {
    pub notice_id: i32,
    pub body: String,
}

pub struct CreateMemoUseCase<M: MemoRepository> {
    pub memos: M,
}

impl<M: MemoRepository> CreateMemoUseCase<M> {
    pub async fn execute(&self, user_id: Uuid, input: CreateMemoInput) -> Result<(), ApiError> {
        let memo = Memo {
            id: Uuid::now_v7(),
            user_id,
            notice_id: input.notice_id,
            body: input.body,
            created_at: Utc::now(),
        };
        self.memos.append(&memo).await
    }
}
