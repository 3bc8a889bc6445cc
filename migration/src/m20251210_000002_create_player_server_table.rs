use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerServer::Table)
                    .if_not_exists()
                    .col(string(PlayerServer::PlayerId))
                    .col(string(PlayerServer::Server))
                    .primary_key(
                        Index::create()
                            .name("pk_player_server")
                            .col(PlayerServer::PlayerId)
                            .col(PlayerServer::Server),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_server_player_id")
                            .from(PlayerServer::Table, PlayerServer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_player_server_server")
                    .table(PlayerServer::Table)
                    .col(PlayerServer::Server)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_player_server_server")
                    .table(PlayerServer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerServer {
    Table,
    PlayerId,
    Server,
}
