use entity::leaderboard::ActiveModel as LeaderboardActive;
use entity::team::ActiveModel as TeamActive;
use entity::team_member::ActiveModel as MemberActive;
use sea_orm::Set;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::utils::{id::new_id, validate};

pub const NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    pub fn build(self) -> Result<TeamActive, AppError> {
        validate::label("team name", &self.name, NAME_MAX_LEN)?;
        Ok(TeamActive {
            id: Set(new_id()),
            name: Set(self.name),
        })
    }
}

/// One row of the team -> user join.
pub fn membership(team_id: Uuid, user_id: Uuid) -> MemberActive {
    MemberActive {
        team_id: Set(team_id),
        user_id: Set(user_id),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLeaderboardEntry {
    pub team_id: Uuid,
    pub points: i32,
}

impl NewLeaderboardEntry {
    pub fn new(team_id: Uuid, points: i32) -> Self {
        Self { team_id, points }
    }

    pub fn build(self) -> LeaderboardActive {
        LeaderboardActive {
            id: Set(new_id()),
            team_id: Set(self.team_id),
            points: Set(self.points),
        }
    }
}
