use sea_orm::ConnectionTrait;
use tracing::info;

use crate::db::{activity, leaderboard, team, user, workout};
use crate::types::error::AppError;

/// Something the reset clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Activities,
    LeaderboardEntries,
    Workouts,
    Memberships,
    Teams,
    Users,
}

impl Collection {
    /// Collections this one holds references into.
    pub const fn depends_on(self) -> &'static [Collection] {
        match self {
            Self::Activities => &[Self::Users],
            Self::LeaderboardEntries => &[Self::Teams],
            Self::Memberships => &[Self::Teams, Self::Users],
            Self::Workouts | Self::Teams | Self::Users => &[],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::LeaderboardEntries => "leaderboard entries",
            Self::Workouts => "workouts",
            Self::Memberships => "team memberships",
            Self::Teams => "teams",
            Self::Users => "users",
        }
    }
}

/// Dependents first, owners last.
pub const RESET_ORDER: [Collection; 6] = [
    Collection::Activities,
    Collection::LeaderboardEntries,
    Collection::Workouts,
    Collection::Memberships,
    Collection::Teams,
    Collection::Users,
];

/// Rows removed per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub activities: u64,
    pub leaderboard_entries: u64,
    pub workouts: u64,
    pub memberships: u64,
    pub teams: u64,
    pub users: u64,
}

impl ResetReport {
    fn record(&mut self, collection: Collection, removed: u64) {
        let slot = match collection {
            Collection::Activities => &mut self.activities,
            Collection::LeaderboardEntries => &mut self.leaderboard_entries,
            Collection::Workouts => &mut self.workouts,
            Collection::Memberships => &mut self.memberships,
            Collection::Teams => &mut self.teams,
            Collection::Users => &mut self.users,
        };
        *slot += removed;
    }
}

pub async fn reset<C: ConnectionTrait>(db: &C) -> Result<ResetReport, AppError> {
    let mut report = ResetReport::default();
    for collection in RESET_ORDER {
        let removed = clear(db, collection).await?;
        info!("Cleared {} ({} rows)", collection.name(), removed);
        report.record(collection, removed);
    }
    Ok(report)
}

async fn clear<C: ConnectionTrait>(db: &C, collection: Collection) -> Result<u64, AppError> {
    match collection {
        Collection::Activities => activity::delete_all_activities(db).await,
        Collection::LeaderboardEntries => leaderboard::delete_all_leaderboard_entries(db).await,
        Collection::Workouts => workout::delete_all_workouts(db).await,
        Collection::Memberships => {
            let mut removed = 0;
            for t in team::persisted_teams(db).await? {
                removed += team::clear_members(db, t.id).await?;
            }
            Ok(removed)
        }
        Collection::Teams => team::delete_persisted_teams(db).await,
        Collection::Users => user::delete_persisted_users(db).await,
    }
}
