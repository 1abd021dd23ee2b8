pub mod admin;
pub mod front;
pub mod homepage;
