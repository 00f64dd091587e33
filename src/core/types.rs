//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// An incoming key/value body before sanitizing.
///
/// Names are unchecked; a `None` value means the caller sent the key without
/// a value (JSON `null`).
pub type RawPayload = BTreeMap<String, Option<String>>;

/// Opaque provider-assigned identifier of a stored variable.
pub type RecordId = String;
