//! Friendship domain model.
//!
//! A friendship is an undirected edge between two player ids. It is always held in
//! canonical order so the same pair maps to exactly one stored row.

use crate::model::friend::FriendshipDto;

/// Orders two ids so the lexicographically smaller one comes first.
///
/// # Arguments
/// - `a` - One endpoint
/// - `b` - The other endpoint
///
/// # Returns
/// - `(&str, &str)` - `(min, max)` of the two ids by byte-wise string ordering
pub fn canonicalize<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Canonical undirected edge between two players.
///
/// Can only be built through `FriendPair::new`, so `user() <= friend()` always holds.
/// Equal ids are accepted and produce a self loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendPair {
    user: String,
    friend: String,
}

impl FriendPair {
    /// Builds the canonical edge between `a` and `b`, in either order.
    pub fn new(a: &str, b: &str) -> Self {
        let (user, friend) = canonicalize(a, b);
        Self {
            user: user.to_string(),
            friend: friend.to_string(),
        }
    }

    /// Smaller id of the pair.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Larger id of the pair.
    pub fn friend(&self) -> &str {
        &self.friend
    }

    /// Converts the pair to a DTO for API responses.
    pub fn into_dto(self) -> FriendshipDto {
        FriendshipDto {
            user: self.user,
            friend: self.friend,
        }
    }
}
