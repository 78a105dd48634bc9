pub mod activity;
pub mod database_service;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;
