/*!
   Navigation helpers for the loosely-structured response trees the
   relayer prints. Every helper fails with a named decode error carrying
   the offending subtree, so a shape mismatch is always surfaced and
   never silently defaulted.
*/

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Index into an object by key.
pub fn field<'a>(value: &'a Value, key: &str) -> Result<&'a Value, Error> {
    value
        .get(key)
        .ok_or_else(|| Error::missing_field(key.to_string(), value.clone()))
}

/// Index into an array by position.
pub fn element(value: &Value, index: usize) -> Result<&Value, Error> {
    value
        .get(index)
        .ok_or_else(|| Error::missing_element(index, value.clone()))
}

/// Find the first event in an array that carries the given event kind
/// as a key, and return that event's payload.
///
/// The relayer may or may not emit an unrelated `UpdateClient` event
/// ahead of the event of interest, so the position of the event in the
/// array is not stable. Searching by kind handles both shapes.
pub fn find_event<'a>(events: &'a Value, kind: &str) -> Result<&'a Value, Error> {
    events
        .as_array()
        .and_then(|events| events.iter().find_map(|event| event.get(kind)))
        .ok_or_else(|| Error::missing_event(kind.to_string(), events.clone()))
}

/// Decode a JSON subtree into a typed record, naming the record in the
/// error when the shape does not match.
pub fn from_value<T: DeserializeOwned>(what: &str, value: &Value) -> Result<T, Error> {
    serde_json::from_value(value.clone())
        .map_err(|e| Error::deserialize(what.to_string(), value.clone(), e))
}
