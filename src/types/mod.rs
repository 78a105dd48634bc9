pub mod activity;
pub mod error;
pub mod team;
pub mod user;
pub mod workout;
