//! Descriptor record port.
//!
//! The absorb pass never looks inside a record beyond these accessors, so
//! any pipeline can run it over its own record type.

use crate::domain::{IdKind, SubsumeMode};

/// Capabilities the absorb pass needs from a descriptor record.
pub trait AppRecord {
    /// The kind of component this record describes.
    fn kind(&self) -> IdKind;

    /// Full id, unique within a collection.
    fn id(&self) -> &str;

    /// The package this record is primarily associated with, if any.
    fn default_package(&self) -> Option<&str>;

    /// Package names the record's package depends on, in declaration order.
    fn dependencies(&self) -> &[String];

    /// Look up a metadata value.
    fn metadata_item(&self, key: &str) -> Option<&str>;

    /// Insert or overwrite a metadata value.
    fn set_metadata_item(&mut self, key: &str, value: &str);

    /// Merge `donor`'s data into this record.
    ///
    /// Implementations must not copy the donor's merge tag; a target that
    /// picked up the tag would itself be absorbed on the next pass.
    fn subsume(&mut self, donor: &Self, mode: SubsumeMode);
}
