pub mod collector;
pub mod db;
pub mod mailer;
