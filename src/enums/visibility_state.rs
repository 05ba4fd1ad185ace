use serde_repr::{Deserialize_repr, Serialize_repr};

/// The visibility state of a user's community profile.
///
/// Taken from the `communityvisibilitystate` field of `GetPlayerSummaries` responses. A
/// profile is only readable by everyone when it is [`VisibilityState::Public`].
#[derive(Debug, Deserialize_repr, Serialize_repr, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum VisibilityState {
    /// The profile is private.
    Private = 1,
    /// The profile is visible to friends only.
    FriendsOnly = 2,
    /// The profile is public.
    Public = 3,
}

impl VisibilityState {
    pub fn is_visible(&self) -> bool {
        *self == Self::Public
    }
}
