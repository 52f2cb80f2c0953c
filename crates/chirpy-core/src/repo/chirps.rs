use std::cmp::Reverse;

use crate::error::ChirpyError;
use crate::models::Chirp;
use crate::store::DocumentStore;

/// Maximum chirp body length, in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words masked out of chirp bodies, matched case-insensitively against
/// whole space-delimited tokens. A token with trailing punctuation is a
/// different token and stays as-is.
const DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Listing order for [`list_chirps`], by chirp id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Create a chirp. The body is length-checked before anything touches the
/// store, then masked and persisted under a fresh id.
pub fn create_chirp(
    store: &dyn DocumentStore,
    body: &str,
    author_id: i32,
) -> Result<Chirp, ChirpyError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ChirpyError::Validation("chirp is too long".to_string()));
    }

    let mut doc = store.load()?;
    let chirp = Chirp {
        id: doc.next_chirp_id(),
        body: clean_body(body),
        author_id,
    };
    doc.last_chirp_id = chirp.id;
    doc.chirps.insert(chirp.id, chirp.clone());
    store.write(&doc)?;

    tracing::debug!(id = chirp.id, author_id, "created chirp");
    Ok(chirp)
}

/// Fetch a single chirp by id.
pub fn get_chirp(store: &dyn DocumentStore, id: i32) -> Result<Chirp, ChirpyError> {
    let doc = store.load()?;
    doc.chirps
        .get(&id)
        .cloned()
        .ok_or_else(|| ChirpyError::NotFound(format!("chirp {id}")))
}

/// List chirps, optionally restricted to one author. The filter is applied
/// before sorting; default order is ascending by id.
pub fn list_chirps(
    store: &dyn DocumentStore,
    author_id: Option<i32>,
    order: SortOrder,
) -> Result<Vec<Chirp>, ChirpyError> {
    let doc = store.load()?;
    let mut chirps: Vec<Chirp> = doc
        .chirps
        .into_values()
        .filter(|c| author_id.is_none_or(|a| c.author_id == a))
        .collect();

    match order {
        SortOrder::Ascending => chirps.sort_by_key(|c| c.id),
        SortOrder::Descending => chirps.sort_by_key(|c| Reverse(c.id)),
    }
    Ok(chirps)
}

/// Delete a chirp. Only the author may delete; the id is never reused.
pub fn delete_chirp(
    store: &dyn DocumentStore,
    id: i32,
    requester_id: i32,
) -> Result<(), ChirpyError> {
    let mut doc = store.load()?;
    let chirp = doc
        .chirps
        .get(&id)
        .ok_or_else(|| ChirpyError::NotFound(format!("chirp {id}")))?;

    if chirp.author_id != requester_id {
        return Err(ChirpyError::Forbidden(
            "only the author can delete a chirp".to_string(),
        ));
    }

    doc.chirps.remove(&id);
    store.write(&doc)?;

    tracing::debug!(id, requester_id, "deleted chirp");
    Ok(())
}

/// Replace denylisted words with the mask token. Tokenization is on single
/// spaces so the body round-trips byte-for-byte when nothing matches.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if DENYLIST.iter().any(|w| word.eq_ignore_ascii_case(w)) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
