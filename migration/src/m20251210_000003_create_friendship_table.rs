use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rows are written in canonical order (user <= friend), so the
        // composite key is the uniqueness constraint on the undirected edge.
        manager
            .create_table(
                Table::create()
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(string(Friendship::User))
                    .col(string(Friendship::Friend))
                    .primary_key(
                        Index::create()
                            .name("pk_friendship")
                            .col(Friendship::User)
                            .col(Friendship::Friend),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by the larger id cannot use the primary key prefix
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_friendship_friend")
                    .table(Friendship::Table)
                    .col(Friendship::Friend)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_friendship_friend")
                    .table(Friendship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendship {
    Table,
    User,
    Friend,
}
