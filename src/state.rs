//! Shared vocabulary for the driver contract.
//!
//! These enumerations are the Redfish-domain view of a system. Drivers map
//! their backend's native representations to and from these values; the
//! string forms are the Redfish literals the protocol layer speaks.

use std::fmt;

/// Observed power state of a system.
///
/// `Unknown` is a valid terminal read result, not an error — a backend that
/// cannot determine state reports it honestly instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
    Unknown,
}

impl PowerState {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerState::On => "On",
            PowerState::Off => "Off",
            PowerState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested power transition — an intent, not a state.
///
/// String forms follow the Redfish `ResetType` literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    /// Transition to running; no-op if already on.
    On,
    /// Same target as `On`, bypassing any backend-side politeness.
    ForceOn,
    /// Immediate hard stop; no-op if already off.
    ForceOff,
    /// Ask the guest to shut itself down. Best-effort on most backends;
    /// returns after signaling, without waiting for the guest.
    GracefulShutdown,
    /// Guest-cooperative stop followed by a start.
    GracefulRestart,
    /// Hard stop followed by a start.
    ForceRestart,
    /// Inject a non-maskable interrupt. Does not change power state.
    Nmi,
}

impl PowerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerAction::On => "On",
            PowerAction::ForceOn => "ForceOn",
            PowerAction::ForceOff => "ForceOff",
            PowerAction::GracefulShutdown => "GracefulShutdown",
            PowerAction::GracefulRestart => "GracefulRestart",
            PowerAction::ForceRestart => "ForceRestart",
            PowerAction::Nmi => "Nmi",
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured next-boot device.
///
/// `Unknown` is valid only when reading; setters accept the three concrete
/// values and nothing else (see `translate::parse_boot_device`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootDevice {
    Pxe,
    Hdd,
    Cd,
    Unknown,
}

impl BootDevice {
    pub fn as_str(self) -> &'static str {
        match self {
            BootDevice::Pxe => "Pxe",
            BootDevice::Hdd => "Hdd",
            BootDevice::Cd => "Cd",
            BootDevice::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BootDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_are_redfish_literals() {
        assert_eq!(PowerState::On.to_string(), "On");
        assert_eq!(PowerAction::GracefulShutdown.to_string(), "GracefulShutdown");
        assert_eq!(BootDevice::Pxe.to_string(), "Pxe");
    }
}
