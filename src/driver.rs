//! The driver contract — the polymorphism boundary between the emulator and
//! whatever technology actually hosts a system.
//!
//! A driver is a stateless gateway: it never owns authoritative system state
//! and never caches what the backend reports. Anything backend-specific (a
//! live connection handle, endpoint URLs) stays private to the concrete
//! implementation. Drivers are constructed once at startup by the registry
//! and shared across every concurrent request for the process lifetime.

use async_trait::async_trait;

use crate::error::RedfinError;
use crate::state::{BootDevice, PowerAction, PowerState};

/// Live inventory snapshot for one system. Assembled per call from the
/// backend; a `None` field means the backend cannot report that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInventory {
    pub memory_gib: Option<u64>,
    pub cpus: Option<u32>,
}

/// Capability set every virtualization backend adapter implements.
///
/// Implementations must be safe for concurrent invocation: many requests may
/// hit the same driver instance at once, across identities and for reads of
/// the same identity. The contract does not serialize concurrent mutations of
/// one system; a driver that needs serialization provides it itself and
/// documents the guarantee it gives.
///
/// Every accessor separates "value indeterminate" from "system absent":
/// indeterminate reads return `Unknown`/`None`, while a missing system is
/// always `SystemNotFound`. Backend failures during an otherwise well-formed
/// call surface as `BackendUnavailable`, `PowerOperationFailed`, or
/// `BootDeviceSetFailed` — never as a hang and never as a raw backend error.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Human-readable descriptor of the backend technology, ideally naming
    /// its connection target. Infallible.
    fn driver(&self) -> String;

    /// Names of the systems currently visible through this backend. No
    /// duplicates; may be empty. Fails only when the backend is unreachable.
    async fn systems(&self) -> Result<Vec<String>, RedfinError>;

    /// Resolve `identity` to the system's canonical UUID.
    ///
    /// Backends without a native stable UUID must return `identity`
    /// verbatim — callers rely on `uuid` being safe and idempotent even
    /// where UUIDs do not exist. No synthesized UUIDs: a value invented
    /// here could drift between calls.
    async fn uuid(&self, identity: &str) -> Result<String, RedfinError>;

    /// Current power state, or `Unknown` when the backend cannot tell.
    /// Ambiguity is not an error; only a missing system is.
    async fn get_power_state(&self, identity: &str) -> Result<PowerState, RedfinError>;

    /// Apply a power action. Per-action semantics are documented on
    /// [`PowerAction`]; `translate::plan` gives drivers the shared no-op
    /// and restart decomposition rules so they only execute primitives.
    ///
    /// Whether a call blocks until the transition completes or returns after
    /// issuing the request is driver-specific; each implementation documents
    /// its choice per action, since caller polling depends on it.
    async fn set_power_state(
        &self,
        identity: &str,
        action: PowerAction,
    ) -> Result<(), RedfinError>;

    /// Currently configured boot device, or `Unknown`.
    async fn get_boot_device(&self, identity: &str) -> Result<BootDevice, RedfinError>;

    /// Set the persistent (next-boot) boot source. Only the three concrete
    /// devices are legal; the translator rejects everything else before the
    /// call reaches a driver.
    async fn set_boot_device(
        &self,
        identity: &str,
        device: BootDevice,
    ) -> Result<(), RedfinError>;

    /// Total memory in GiB, or `None` if the backend cannot report it.
    async fn get_total_memory(&self, identity: &str) -> Result<Option<u64>, RedfinError>;

    /// Total CPU count, or `None` if the backend cannot report it.
    async fn get_total_cpus(&self, identity: &str) -> Result<Option<u32>, RedfinError>;

    /// Both inventory reads as one snapshot. Sourced live on every call.
    async fn inventory(&self, identity: &str) -> Result<SystemInventory, RedfinError> {
        Ok(SystemInventory {
            memory_gib: self.get_total_memory(identity).await?,
            cpus: self.get_total_cpus(identity).await?,
        })
    }
}
