pub mod admin;
pub mod auth;
pub mod favorite;
pub mod memo;
pub mod notice;
