//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of an active pointer or touch contact.
///
/// Hosts assign these; the engine only uses them as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(pub u32);

impl ContactId {
    /// The mouse pointer, treated as a single contact while a button is held.
    pub const POINTER: ContactId = ContactId(u32::MAX);

    /// Returns the raw identifier.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ContactId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
