pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_player_table;
mod m20251210_000002_create_player_server_table;
mod m20251210_000003_create_friendship_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_player_table::Migration),
            Box::new(m20251210_000002_create_player_server_table::Migration),
            Box::new(m20251210_000003_create_friendship_table::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("migrations_pvp").into_iden()
    }
}
