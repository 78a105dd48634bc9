//! Reset-and-populate of the development dataset.
//!
//! A run clears every collection in [`reset::RESET_ORDER`] and inserts the
//! literals from [`fixtures`]. [`populate`] wraps the whole run in one
//! transaction, so a failure leaves the previous dataset in place.

pub mod fixtures;
pub mod reset;

use entity::user::Model as UserModel;
use sea_orm::ConnectionTrait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::database_service::{DatabaseService, TableCounts};
use crate::db::{activity, leaderboard, team, user, workout};
use crate::types::error::AppError;
use reset::ResetReport;

pub const SUCCESS_MESSAGE: &str = "Successfully populated the database with test data.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: ResetReport,
    pub inserted: TableCounts,
}

/// Runs [`populate_in`] inside a transaction opened on `db`.
pub async fn populate(db: &DatabaseService) -> Result<SeedReport, AppError> {
    let txn = db.begin().await?;
    match populate_in(&txn).await {
        Ok(report) => {
            txn.commit().await?;
            info!("Seed committed: {:?}", report.inserted);
            Ok(report)
        }
        Err(err) => {
            warn!("Seeding failed ({}), rolling back", err.kind());
            txn.rollback().await?;
            Err(err)
        }
    }
}

/// The ordered steps of a run against any connection or transaction.
pub async fn populate_in<C: ConnectionTrait>(db: &C) -> Result<SeedReport, AppError> {
    let removed = reset::reset(db).await?;
    let mut inserted = TableCounts::default();

    for payload in fixtures::users() {
        user::create_user(db, payload).await?;
        inserted.users += 1;
    }

    // Work from what storage holds, not from the insert results.
    let emails = fixtures::user_emails();
    let users = in_fixture_order(user::find_users_by_email(db, &emails).await?, &emails)?;
    info!("Inserted {} users", users.len());

    let mut teams = Vec::new();
    for payload in fixtures::teams() {
        teams.push(team::create_team(db, payload).await?);
    }
    inserted.teams = teams.len() as u64;

    let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
    let (blue, gold) = fixtures::team_split(&user_ids)?;
    inserted.memberships += team::add_members(db, teams[0].id, blue).await?;
    inserted.memberships += team::add_members(db, teams[1].id, gold).await?;
    info!("Inserted {} teams with {} memberships", inserted.teams, inserted.memberships);

    inserted.activities = activity::create_activities(db, fixtures::activities(&users)?).await?;
    inserted.leaderboard_entries =
        leaderboard::create_leaderboard_entries(db, fixtures::leaderboard(&teams)?).await?;
    inserted.workouts = workout::create_workouts(db, fixtures::workouts()).await?;
    info!(
        "Inserted {} activities, {} leaderboard entries, {} workouts",
        inserted.activities, inserted.leaderboard_entries, inserted.workouts
    );

    Ok(SeedReport { removed, inserted })
}

fn in_fixture_order(mut found: Vec<UserModel>, emails: &[&str]) -> Result<Vec<UserModel>, AppError> {
    emails
        .iter()
        .map(|email| {
            found
                .iter()
                .position(|u| u.email == *email)
                .map(|i| found.swap_remove(i))
                .ok_or_else(|| AppError::NotFound(format!("seeded user {email} is missing")))
        })
        .collect()
}
