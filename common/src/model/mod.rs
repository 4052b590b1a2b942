pub mod feedback;
pub mod identity;
pub mod profile;

use serde::{Serialize, Serializer};

/// Marker written in place of a server-assigned timestamp. The SDK bridge
/// replaces every field holding this value with the directory's
/// `serverTimestamp()` sentinel before the document is written, so clocks
/// are always assigned by the server, never by the client.
pub const SERVER_TIMESTAMP: &str = "__SERVER_TIMESTAMP__";

/// Zero-sized placeholder for a server-assigned timestamp field.
///
/// Serializes to [`SERVER_TIMESTAMP`]; the client never reads these fields
/// back, so there is no deserialization counterpart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerStamp;

impl Serialize for ServerStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(SERVER_TIMESTAMP)
    }
}
