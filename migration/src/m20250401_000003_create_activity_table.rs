use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Activity {
    Table,
    Id,
    UserId,
    ActivityType,
    Duration,
    Date,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Activity::Table)
                .if_not_exists()
                .col(ColumnDef::new(Activity::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Activity::UserId).uuid().not_null())
                .col(ColumnDef::new(Activity::ActivityType).string_len(100).not_null())
                .col(ColumnDef::new(Activity::Duration).integer().not_null())
                .col(ColumnDef::new(Activity::Date).date().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_activity_user")
                        .from(Activity::Table, Activity::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_activity_user")
                .table(Activity::Table)
                .col(Activity::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Activity::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
