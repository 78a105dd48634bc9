use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    TeamId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Team::Table)
                .if_not_exists()
                .col(ColumnDef::new(Team::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Team::Name).string_len(100).not_null())
                .to_owned(),
        ).await?;

        // Join table owned by team. Dropping either side removes the membership row only.
        m.create_table(
            Table::create()
                .table(TeamMembers::Table)
                .if_not_exists()
                .col(ColumnDef::new(TeamMembers::TeamId).uuid().not_null())
                .col(ColumnDef::new(TeamMembers::UserId).uuid().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_team_members")
                        .col(TeamMembers::TeamId)
                        .col(TeamMembers::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_members_team")
                        .from(TeamMembers::Table, TeamMembers::TeamId)
                        .to(Team::Table, Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_members_user")
                        .from(TeamMembers::Table, TeamMembers::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_team_members_user")
                .table(TeamMembers::Table)
                .col(TeamMembers::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes implicitly with table
        m.drop_table(Table::drop().table(TeamMembers::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Team::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
