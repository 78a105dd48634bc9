use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workout::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workout::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Workout::Name)
                            .string_len(100)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Workout::Description)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Workout::Difficulty)
                            .string_len(50)
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Workout::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Workout {
    Table,
    Id,
    Name,
    Description,
    Difficulty,
}
