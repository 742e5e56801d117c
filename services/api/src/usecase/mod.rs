pub mod code;
pub mod collect;
pub mod favorite;
pub mod memo;
pub mod notice;
pub mod session;
