use serde::{Deserialize, Serialize};

/// A chirp: a length-bounded, profanity-masked text post owned by a user.
///
/// Immutable once stored, except for deletion by its author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: i32,

    /// Post body, at most 140 characters, denylisted words already masked.
    pub body: String,

    /// Id of the [`User`](crate::models::User) that created this chirp.
    pub author_id: i32,
}
