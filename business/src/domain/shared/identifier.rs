use uuid::Uuid;

/// Length of the hyphenated UUID text form, the only accepted external form.
const CANONICAL_LEN: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier.invalid")]
pub struct InvalidIdentifier;

/// Converts an external identifier into the store's key.
///
/// Only the 36-character hyphenated form is accepted (hex digits in either
/// case). Braced, URN and un-hyphenated spellings are rejected even though
/// they denote a valid UUID.
pub fn decode(external: &str) -> Result<Uuid, InvalidIdentifier> {
    if external.len() != CANONICAL_LEN {
        return Err(InvalidIdentifier);
    }
    Uuid::try_parse(external).map_err(|_| InvalidIdentifier)
}

/// Renders a store key in its external form (lower-case, hyphenated).
pub fn encode(id: Uuid) -> String {
    id.hyphenated().to_string()
}
