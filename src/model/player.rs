use serde::{Deserialize, Serialize};

/// Player as returned by the API.
///
/// `servers` is only present on single-player lookups; list results are already
/// filtered to one server and leave it out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerDto {
    pub id: String,
    pub username: String,
    pub ign: String,
    #[serde(rename = "friendcode", alias = "friendCode")]
    pub friend_code: String,
    #[serde(
        rename = "eggultra",
        alias = "eggUltra",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub egg_ultra: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<String>>,
}

/// Request body for creating a player profile.
///
/// Fields default to empty so missing values are reported as a 400 by validation rather
/// than as a deserialization rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CreatePlayerDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub ign: String,
    #[serde(default, rename = "friendcode", alias = "friendCode")]
    pub friend_code: String,
    #[serde(default, rename = "eggultra", alias = "eggUltra")]
    pub egg_ultra: Option<bool>,
}

/// Request body for registering a player on a server.
///
/// The profile fields are optional; when all of them are given the player is created
/// before being registered.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RegisterPlayerDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub server: String,
    pub username: Option<String>,
    pub ign: Option<String>,
    #[serde(rename = "friendcode", alias = "friendCode")]
    pub friend_code: Option<String>,
    #[serde(rename = "eggultra", alias = "eggUltra")]
    pub egg_ultra: Option<bool>,
}
