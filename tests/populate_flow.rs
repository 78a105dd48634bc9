use std::collections::HashSet;

use chrono::NaiveDate;
use octofit_tracker::db::{team, user};
use octofit_tracker::seed::{self, fixtures, reset::ResetReport};
use octofit_tracker::types::{error::AppError, team::NewTeam, user::NewUser};
use sea_orm::ConnectionTrait;

mod common;
use common::{fixture_counts, TestContext};

#[tokio::test]
async fn test_populate_on_empty_database() {
    let ctx = TestContext::new().await;

    let report = seed::populate(&ctx.db).await.unwrap();

    assert_eq!(report.inserted, fixture_counts());
    assert_eq!(report.removed, ResetReport::default());
    assert_eq!(ctx.db.count_all().await.unwrap(), fixture_counts());
}

#[tokio::test]
async fn test_seeded_emails_match_fixture() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let emails: HashSet<String> = ctx.db.list_users().await.unwrap().into_iter().map(|u| u.email).collect();
    let expected: HashSet<String> = [
        "thundergod@mhigh.edu",
        "metalgeek@mhigh.edu",
        "zerocool@mhigh.edu",
        "crashoverride@mhigh.edu",
        "sleeptoken@mhigh.edu",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(emails, expected);

    let thor = ctx.db.get_user_by_email("thundergod@mhigh.edu").await.unwrap();
    assert_eq!(thor.name, "Thor");
    assert_eq!(thor.age, 30);
}

#[tokio::test]
async fn test_teams_partition_users() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let blue = ctx.db.get_team_by_name("Blue Team").await.unwrap();
    let gold = ctx.db.get_team_by_name("Gold Team").await.unwrap();

    let blue_members: HashSet<String> =
        ctx.db.list_team_members(blue.id).await.unwrap().into_iter().map(|u| u.name).collect();
    let gold_members: HashSet<String> =
        ctx.db.list_team_members(gold.id).await.unwrap().into_iter().map(|u| u.name).collect();

    assert_eq!(blue_members.len(), 3);
    assert_eq!(gold_members.len(), 2);
    assert!(blue_members.is_disjoint(&gold_members));
    assert_eq!(blue_members.len() + gold_members.len(), ctx.db.list_users().await.unwrap().len());

    assert!(blue_members.contains("Thor"));
    assert!(blue_members.contains("Tony Stark"));
    assert!(blue_members.contains("Steve Rogers"));
    assert!(gold_members.contains("Natasha Romanoff"));
    assert!(gold_members.contains("Bruce Banner"));
}

#[tokio::test]
async fn test_activities_belong_to_fixture_users() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let thor = ctx.db.get_user_by_email("thundergod@mhigh.edu").await.unwrap();
    let thor_activities = ctx.db.list_activities_for_user(thor.id).await.unwrap();
    assert_eq!(thor_activities.len(), 1);
    assert_eq!(thor_activities[0].activity_type, "Cycling");
    assert_eq!(thor_activities[0].duration, 60);
    assert_eq!(thor_activities[0].date, NaiveDate::from_ymd_opt(2025, 4, 8).unwrap());

    for ((email, _, _), (kind, minutes, _)) in fixtures::USERS.iter().zip(fixtures::ACTIVITIES) {
        let owner = ctx.db.get_user_by_email(email).await.unwrap();
        let owned = ctx.db.list_activities_for_user(owner.id).await.unwrap();
        assert_eq!(owned.len(), 1, "{email}");
        assert_eq!(owned[0].activity_type, kind);
        assert_eq!(owned[0].duration, minutes);
    }
}

#[tokio::test]
async fn test_leaderboard_points_per_team() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let blue = ctx.db.get_team_by_name("Blue Team").await.unwrap();
    let gold = ctx.db.get_team_by_name("Gold Team").await.unwrap();

    let blue_points: Vec<i32> = ctx.db.leaderboard_for_team(blue.id).await.unwrap().iter().map(|e| e.points).collect();
    let gold_points: Vec<i32> = ctx.db.leaderboard_for_team(gold.id).await.unwrap().iter().map(|e| e.points).collect();
    assert_eq!(blue_points, vec![300]);
    assert_eq!(gold_points, vec![250]);
}

#[tokio::test]
async fn test_workout_catalog() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let workouts = ctx.db.list_workouts().await.unwrap();
    assert_eq!(workouts.len(), 5);
    let crossfit = workouts.iter().find(|w| w.name == "Crossfit").unwrap();
    assert_eq!(crossfit.description, "High-intensity functional training");
    assert_eq!(crossfit.difficulty, "Hard");
}

#[tokio::test]
async fn test_second_run_keeps_dataset_with_new_ids() {
    let ctx = TestContext::new().await;

    seed::populate(&ctx.db).await.unwrap();
    let first_ids: HashSet<_> = ctx.db.list_users().await.unwrap().into_iter().map(|u| u.id).collect();
    let first_teams: HashSet<_> = ctx.db.list_teams().await.unwrap().into_iter().map(|t| t.id).collect();

    // The reset runs against a fully populated database, members attached.
    let report = seed::populate(&ctx.db).await.unwrap();
    assert_eq!(report.removed.users, 5);
    assert_eq!(report.removed.teams, 2);
    assert_eq!(report.removed.memberships, 5);
    assert_eq!(report.removed.activities, 5);
    assert_eq!(report.removed.leaderboard_entries, 2);
    assert_eq!(report.removed.workouts, 5);

    assert_eq!(ctx.db.count_all().await.unwrap(), fixture_counts());
    let second_ids: HashSet<_> = ctx.db.list_users().await.unwrap().into_iter().map(|u| u.id).collect();
    let second_teams: HashSet<_> = ctx.db.list_teams().await.unwrap().into_iter().map(|t| t.id).collect();
    assert!(first_ids.is_disjoint(&second_ids));
    assert!(first_teams.is_disjoint(&second_teams));
}

#[tokio::test]
async fn test_unrelated_rows_are_cleared() {
    let ctx = TestContext::new().await;
    let conn = ctx.db.connection();

    let stray = user::create_user(conn, NewUser::new("stray@example.com", "Stray", 22)).await.unwrap();
    let squad = team::create_team(conn, NewTeam::new("Red Team")).await.unwrap();
    team::add_members(conn, squad.id, &[stray.id]).await.unwrap();

    seed::populate(&ctx.db).await.unwrap();

    assert_eq!(ctx.db.count_all().await.unwrap(), fixture_counts());
    assert!(matches!(ctx.db.get_user_by_email("stray@example.com").await, Err(AppError::NotFound(_))));
    assert!(matches!(ctx.db.get_team(squad.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let result = user::create_user(
        ctx.db.connection(),
        NewUser::new("thundergod@mhigh.edu", "Imposter", 99),
    )
    .await;

    assert!(matches!(result, Err(AppError::AlreadyExists)));
    assert_eq!(ctx.db.list_users().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_activities_and_memberships() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let thor = ctx.db.get_user_by_email("thundergod@mhigh.edu").await.unwrap();
    let blue = ctx.db.get_team_by_name("Blue Team").await.unwrap();

    ctx.db.delete_user(thor.id).await.unwrap();

    assert!(ctx.db.list_activities_for_user(thor.id).await.unwrap().is_empty());
    assert_eq!(ctx.db.list_activities().await.unwrap().len(), 4);
    assert_eq!(ctx.db.list_team_members(blue.id).await.unwrap().len(), 2);
    // The team survives losing a member.
    assert!(ctx.db.get_team(blue.id).await.is_ok());
}

#[tokio::test]
async fn test_deleting_team_cascades_to_leaderboard_but_not_users() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();

    let gold = ctx.db.get_team_by_name("Gold Team").await.unwrap();
    ctx.db.delete_team(gold.id).await.unwrap();

    assert!(ctx.db.leaderboard_for_team(gold.id).await.unwrap().is_empty());
    let counts = ctx.db.count_all().await.unwrap();
    assert_eq!(counts.users, 5);
    assert_eq!(counts.teams, 1);
    assert_eq!(counts.memberships, 3);
    assert_eq!(counts.leaderboard_entries, 1);
    assert_eq!(counts.activities, 5);
}

#[tokio::test]
async fn test_failed_run_rolls_back() {
    let ctx = TestContext::new().await;
    seed::populate(&ctx.db).await.unwrap();
    let before: HashSet<_> = ctx.db.list_users().await.unwrap().into_iter().map(|u| u.id).collect();

    // Break the third reset step so the run fails after clearing activities and leaderboard.
    ctx.db.connection().execute_unprepared("DROP TABLE workout").await.unwrap();

    let result = seed::populate(&ctx.db).await;
    assert!(matches!(result, Err(AppError::Db(_))));

    let after: HashSet<_> = ctx.db.list_users().await.unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(before, after);
    assert_eq!(ctx.db.list_activities().await.unwrap().len(), 5);
    let blue = ctx.db.get_team_by_name("Blue Team").await.unwrap();
    assert_eq!(ctx.db.leaderboard_for_team(blue.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_rows_is_not_found() {
    let ctx = TestContext::new().await;

    let missing = octofit_tracker::utils::id::new_id();
    assert!(matches!(ctx.db.delete_user(missing).await, Err(AppError::NotFound(_))));
    assert!(matches!(ctx.db.delete_team(missing).await, Err(AppError::NotFound(_))));
    assert!(matches!(ctx.db.get_user_by_id(&missing).await, Err(AppError::NotFound(_))));
}
