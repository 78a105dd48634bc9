use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Leaderboard {
    Table,
    Id,
    TeamId,
    Points,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Leaderboard::Table)
                .if_not_exists()
                .col(ColumnDef::new(Leaderboard::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Leaderboard::TeamId).uuid().not_null())
                .col(ColumnDef::new(Leaderboard::Points).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_leaderboard_team")
                        .from(Leaderboard::Table, Leaderboard::TeamId)
                        .to(Team::Table, Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_leaderboard_team")
                .table(Leaderboard::Table)
                .col(Leaderboard::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Leaderboard::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
