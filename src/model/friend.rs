use serde::{Deserialize, Serialize};

/// Request body for adding a friendship.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AddFriendDto {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub friend: String,
}

/// Stored friendship edge, in canonical order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FriendshipDto {
    pub user: String,
    pub friend: String,
}
