use octofit_tracker::db::database_service::DatabaseService;
use octofit_tracker::seed;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

mod common;
use common::{fixture_counts, get_test_config};

struct PostgresContext {
    db: DatabaseService,
    _container: ContainerAsync<Postgres>,
}

impl PostgresContext {
    async fn new() -> PostgresContext {
        let container = Postgres::default().start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = DatabaseService::new(&get_test_config(&db_url))
            .await
            .expect("Failed to initialize DatabaseService");

        PostgresContext {
            db,
            _container: container,
        }
    }
}

#[tokio::test]
#[ignore = "needs a docker daemon"]
async fn test_populate_twice_on_postgres() {
    let ctx = PostgresContext::new().await;

    seed::populate(&ctx.db).await.unwrap();
    assert_eq!(ctx.db.count_all().await.unwrap(), fixture_counts());

    let report = seed::populate(&ctx.db).await.unwrap();
    assert_eq!(report.removed.teams, 2);
    assert_eq!(ctx.db.count_all().await.unwrap(), fixture_counts());

    let blue = ctx.db.get_team_by_name("Blue Team").await.unwrap();
    assert_eq!(ctx.db.list_team_members(blue.id).await.unwrap().len(), 3);
}
