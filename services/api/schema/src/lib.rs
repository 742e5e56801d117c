//! sea-orm entities for the EERS API database.

pub mod favorites;
pub mod login_tokens;
pub mod memos;
pub mod notices;
pub mod otp_codes;
pub mod users;
