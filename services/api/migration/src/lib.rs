//! Database migrations for the EERS API.

use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_otp_codes;
mod m20260801_000003_create_login_tokens;
mod m20260801_000004_create_notices;
mod m20260801_000005_create_favorites;
mod m20260801_000006_create_memos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_otp_codes::Migration),
            Box::new(m20260801_000003_create_login_tokens::Migration),
            Box::new(m20260801_000004_create_notices::Migration),
            Box::new(m20260801_000005_create_favorites::Migration),
            Box::new(m20260801_000006_create_memos::Migration),
        ]
    }
}
