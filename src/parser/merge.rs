//! Cross-file merge: fold per-file records into one collection.
//!
//! Files are merged in the order they were processed, so a function defined
//! in several files ends up with the record from the last one.

use crate::model::Records;

/// Move every record of `source` into `target`, replacing whole records on
/// name collision.
pub fn merge(target: &mut Records, source: Records) {
    target.extend(source);
}
