use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    /// Caller-supplied platform user id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub ign: String,
    pub friend_code: String,
    pub egg_ultra: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_server::Entity")]
    PlayerServer,
}

impl Related<super::player_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
