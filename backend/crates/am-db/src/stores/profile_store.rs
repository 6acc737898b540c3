//! Record store abstraction.
//!
//! A store holds exactly one `Profile`. Backends differ only in the medium;
//! callers never see which one is active.

use crate::Result as DbErrorResult;

use am_core::Profile;

use async_trait::async_trait;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create schema/file and seed an empty record if none exists.
    /// Never overwrites an existing record.
    async fn initialize(&self) -> DbErrorResult<()>;

    /// Current record. Fails with `Uninitialized` when nothing is stored
    /// and `CorruptRecord` when the stored document cannot be parsed.
    async fn read(&self) -> DbErrorResult<Profile>;

    /// Replace the whole record; durable once this returns.
    async fn write(&self, profile: &Profile) -> DbErrorResult<()>;

    /// Cheap reachability check for health probes.
    async fn ping(&self) -> DbErrorResult<()>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
