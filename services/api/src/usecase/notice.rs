use crate::domain::repository::NoticeRepository;
use crate::domain::types::{NOTICE_LIST_LIMIT, Notice};
use crate::error::ApiError;

pub struct ListNoticesUseCase<N: NoticeRepository> {
    pub notices: N,
}

impl<N: NoticeRepository> ListNoticesUseCase<N> {
    pub async fn execute(&self) -> Result<Vec<Notice>, ApiError> {
        self.notices.list_recent(NOTICE_LIST_LIMIT).await
    }
}
