use sea_orm::entity::prelude::*;

/// User account, provisioned on first successful OTP verification.
/// `email` is the natural key login flows resolve against; `role` is a
/// smallint (0 = member, 1 = admin).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub office: String,
    pub role: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::login_tokens::Entity")]
    LoginTokens,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
    #[sea_orm(has_many = "super::memos::Entity")]
    Memos,
}

impl Related<super::login_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoginTokens.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl Related<super::memos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
