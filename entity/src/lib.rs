pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod team_member;
pub mod user;
pub mod workout;

/*
 Users exist on their own. Teams own a membership list (team_members) that points at users,
 removing a team drops its memberships and leaderboard entries but never the users.
 Activities hang off a user and go away with it.
 Workouts are a standalone catalog.
 */
