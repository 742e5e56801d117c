use sea_orm::entity::prelude::*;

/// Procurement notice scraped by the external collector service. This API
/// only reads the table; the collector owns its contents and may rewrite
/// them wholesale, which is why favorites carry no foreign key into it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub client: String,
    pub notice_date: chrono::DateTime<chrono::Utc>,
    pub detail_link: String,
    pub office: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
