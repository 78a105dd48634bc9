//! The fixed development dataset.

use chrono::NaiveDate;
use entity::team::Model as TeamModel;
use entity::user::Model as UserModel;
use uuid::Uuid;

use crate::types::activity::NewActivity;
use crate::types::error::AppError;
use crate::types::team::{NewLeaderboardEntry, NewTeam};
use crate::types::user::NewUser;
use crate::types::workout::NewWorkout;

/// (email, name, age)
pub const USERS: [(&str, &str, i32); 5] = [
    ("thundergod@mhigh.edu", "Thor", 30),
    ("metalgeek@mhigh.edu", "Tony Stark", 35),
    ("zerocool@mhigh.edu", "Steve Rogers", 32),
    ("crashoverride@mhigh.edu", "Natasha Romanoff", 28),
    ("sleeptoken@mhigh.edu", "Bruce Banner", 40),
];

pub const BLUE_TEAM: &str = "Blue Team";
pub const GOLD_TEAM: &str = "Gold Team";

/// Users (in fixture order) that go to the blue team; the rest are gold.
pub const BLUE_TEAM_SIZE: usize = 3;

/// (activity_type, minutes, (year, month, day)), one per user in fixture order.
pub const ACTIVITIES: [(&str, i32, (i32, u32, u32)); 5] = [
    ("Cycling", 60, (2025, 4, 8)),
    ("Crossfit", 120, (2025, 4, 7)),
    ("Running", 90, (2025, 4, 6)),
    ("Strength", 30, (2025, 4, 5)),
    ("Swimming", 75, (2025, 4, 4)),
];

/// Blue, gold.
pub const LEADERBOARD_POINTS: [i32; 2] = [300, 250];

/// (name, description, difficulty)
pub const WORKOUTS: [(&str, &str, &str); 5] = [
    ("Cycling Training", "Training for a road cycling event", "Medium"),
    ("Crossfit", "High-intensity functional training", "Hard"),
    ("Running Training", "Training for a marathon", "Medium"),
    ("Strength Training", "Weightlifting and strength exercises", "Hard"),
    ("Swimming Training", "Training for a swimming competition", "Medium"),
];

pub fn user_emails() -> Vec<&'static str> {
    USERS.iter().map(|(email, _, _)| *email).collect()
}

pub fn users() -> Vec<NewUser> {
    USERS
        .iter()
        .map(|(email, name, age)| NewUser::new(email, name, *age))
        .collect()
}

pub fn teams() -> [NewTeam; 2] {
    [NewTeam::new(BLUE_TEAM), NewTeam::new(GOLD_TEAM)]
}

/// Blue members then gold members, by fixture position.
pub fn team_split(user_ids: &[Uuid]) -> Result<(&[Uuid], &[Uuid]), AppError> {
    if user_ids.len() != USERS.len() {
        return Err(AppError::Validation(format!(
            "expected {} users for the team fixture, got {}",
            USERS.len(),
            user_ids.len()
        )));
    }
    Ok(user_ids.split_at(BLUE_TEAM_SIZE))
}

/// Pairs each activity with the user at the same fixture position.
pub fn activities(users: &[UserModel]) -> Result<Vec<NewActivity>, AppError> {
    if users.len() != ACTIVITIES.len() {
        return Err(AppError::Validation(format!(
            "expected {} users for the activity fixture, got {}",
            ACTIVITIES.len(),
            users.len()
        )));
    }
    users
        .iter()
        .zip(ACTIVITIES)
        .map(|(u, (kind, minutes, (y, m, d)))| -> Result<NewActivity, AppError> {
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| AppError::Validation(format!("invalid fixture date {y}-{m}-{d}")))?;
            Ok(NewActivity::new(u.id, kind, minutes, date))
        })
        .collect()
}

/// One entry per team, blue then gold.
pub fn leaderboard(teams: &[TeamModel]) -> Result<Vec<NewLeaderboardEntry>, AppError> {
    if teams.len() != LEADERBOARD_POINTS.len() {
        return Err(AppError::Validation(format!(
            "expected {} teams for the leaderboard fixture, got {}",
            LEADERBOARD_POINTS.len(),
            teams.len()
        )));
    }
    Ok(teams
        .iter()
        .zip(LEADERBOARD_POINTS)
        .map(|(t, points)| NewLeaderboardEntry::new(t.id, points))
        .collect())
}

pub fn workouts() -> Vec<NewWorkout> {
    WORKOUTS
        .iter()
        .map(|(name, description, difficulty)| NewWorkout::new(name, description, difficulty))
        .collect()
}
