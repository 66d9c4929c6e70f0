//! State translation between the Redfish domain and backend-native values.
//!
//! Every mutating call goes through here on its way to a driver: raw caller
//! input is parsed into the contract's enumerations (with the canonical error
//! mapping), and backend-native state strings are normalized on the way out.
//! Centralizing both keeps drivers free of validation code and keeps the
//! InvalidBootDevice / UnsupportedOperation mapping identical across backends.

use crate::driver::Driver;
use crate::error::RedfinError;
use crate::state::{BootDevice, PowerAction, PowerState};

/// Parse a Redfish `ResetType` literal into a [`PowerAction`].
///
/// Anything outside the seven known literals is an unsupported operation —
/// the contract has no "malformed action" error distinct from "action this
/// layer cannot perform".
pub fn parse_power_action(raw: &str) -> Result<PowerAction, RedfinError> {
    match raw {
        "On" => Ok(PowerAction::On),
        "ForceOn" => Ok(PowerAction::ForceOn),
        "ForceOff" => Ok(PowerAction::ForceOff),
        "GracefulShutdown" => Ok(PowerAction::GracefulShutdown),
        "GracefulRestart" => Ok(PowerAction::GracefulRestart),
        "ForceRestart" => Ok(PowerAction::ForceRestart),
        "Nmi" => Ok(PowerAction::Nmi),
        other => Err(RedfinError::UnsupportedOperation {
            operation: format!("power action '{other}'"),
        }),
    }
}

/// Parse a boot device for a setter call.
///
/// Only the three concrete devices are legal here; `Unknown` is a valid read
/// result but never a valid target.
pub fn parse_boot_device(raw: &str) -> Result<BootDevice, RedfinError> {
    match raw {
        "Pxe" => Ok(BootDevice::Pxe),
        "Hdd" => Ok(BootDevice::Hdd),
        "Cd" => Ok(BootDevice::Cd),
        other => Err(RedfinError::InvalidBootDevice {
            device: other.to_string(),
        }),
    }
}

/// Reject `Unknown` as a setter target when the caller already holds a
/// [`BootDevice`] rather than a raw string.
pub fn settable_boot_device(device: BootDevice) -> Result<BootDevice, RedfinError> {
    match device {
        BootDevice::Unknown => Err(RedfinError::InvalidBootDevice {
            device: device.to_string(),
        }),
        concrete => Ok(concrete),
    }
}

/// Normalize a backend-native power state string.
///
/// Covers the vocabulary of the usual suspects (libvirt domain states, cloud
/// instance states). Unmapped input becomes `Unknown`, never an error — an
/// exotic backend state is indeterminate, not broken.
pub fn power_state_from_native(native: &str) -> PowerState {
    match native.to_ascii_lowercase().as_str() {
        "on" | "running" | "blocked" | "active" | "poweredon" => PowerState::On,
        "off" | "shutoff" | "shut off" | "shutdown" | "stopped" | "poweredoff" | "crashed" => {
            PowerState::Off
        }
        _ => PowerState::Unknown,
    }
}

/// Normalize a backend-native boot device string.
pub fn boot_device_from_native(native: &str) -> BootDevice {
    match native.to_ascii_lowercase().as_str() {
        "network" | "pxe" => BootDevice::Pxe,
        "hd" | "disk" | "hdd" => BootDevice::Hdd,
        "cdrom" | "cd" | "dvd" => BootDevice::Cd,
        _ => BootDevice::Unknown,
    }
}

// ── Transition planning ──────────────────────────────────

/// What a driver must actually do to honor a power action, given the state
/// it just observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Already in the requested state.
    None,
    Start,
    GracefulStop,
    ForceStop,
    Restart { graceful: bool },
    Nmi,
}

/// Plan the transition for `action` against the observed `current` state.
///
/// This is where the contract's idempotence rules live: On against a running
/// system and ForceOff/GracefulShutdown against a stopped one plan to
/// `None`, which drivers report as success without touching the backend.
/// A restart of a stopped system degrades to a plain start. When `current`
/// is `Unknown` the no-op cannot be proven, so the full action is planned.
pub fn plan(current: PowerState, action: PowerAction) -> Transition {
    match action {
        PowerAction::On | PowerAction::ForceOn => match current {
            PowerState::On => Transition::None,
            _ => Transition::Start,
        },
        PowerAction::ForceOff => match current {
            PowerState::Off => Transition::None,
            _ => Transition::ForceStop,
        },
        PowerAction::GracefulShutdown => match current {
            PowerState::Off => Transition::None,
            _ => Transition::GracefulStop,
        },
        PowerAction::GracefulRestart => match current {
            PowerState::Off => Transition::Start,
            _ => Transition::Restart { graceful: true },
        },
        PowerAction::ForceRestart => match current {
            PowerState::Off => Transition::Start,
            _ => Transition::Restart { graceful: false },
        },
        PowerAction::Nmi => Transition::Nmi,
    }
}

// ── Mediated dispatch ────────────────────────────────────

/// Validate a raw power action and dispatch it to `driver`.
///
/// This is the mediation point for power mutations: the protocol layer hands
/// over the caller's literal string and never constructs actions itself.
pub async fn apply_power_action(
    driver: &dyn Driver,
    identity: &str,
    raw: &str,
) -> Result<(), RedfinError> {
    let action = parse_power_action(raw)?;
    tracing::debug!(identity, action = %action, "applying power action");
    driver.set_power_state(identity, action).await
}

/// Validate a raw boot device and dispatch it to `driver`.
pub async fn apply_boot_device(
    driver: &dyn Driver,
    identity: &str,
    raw: &str,
) -> Result<(), RedfinError> {
    let device = parse_boot_device(raw)?;
    tracing::debug!(identity, device = %device, "setting boot device");
    driver.set_boot_device(identity, device).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_reset_type_literal() {
        for (raw, action) in [
            ("On", PowerAction::On),
            ("ForceOn", PowerAction::ForceOn),
            ("ForceOff", PowerAction::ForceOff),
            ("GracefulShutdown", PowerAction::GracefulShutdown),
            ("GracefulRestart", PowerAction::GracefulRestart),
            ("ForceRestart", PowerAction::ForceRestart),
            ("Nmi", PowerAction::Nmi),
        ] {
            assert_eq!(parse_power_action(raw).unwrap(), action);
        }
    }

    #[test]
    fn unknown_action_is_unsupported() {
        let err = parse_power_action("PushPowerButton").unwrap_err();
        assert!(matches!(err, RedfinError::UnsupportedOperation { .. }));
    }

    #[test]
    fn boot_device_setter_rejects_anything_outside_the_three() {
        assert_eq!(parse_boot_device("Pxe").unwrap(), BootDevice::Pxe);
        for bad in ["InvalidValue", "Unknown", "pxe", ""] {
            let err = parse_boot_device(bad).unwrap_err();
            assert!(matches!(err, RedfinError::InvalidBootDevice { .. }), "{bad}");
        }
        assert!(settable_boot_device(BootDevice::Unknown).is_err());
        assert_eq!(
            settable_boot_device(BootDevice::Cd).unwrap(),
            BootDevice::Cd
        );
    }

    #[test]
    fn native_power_states_normalize_lossily() {
        assert_eq!(power_state_from_native("running"), PowerState::On);
        assert_eq!(power_state_from_native("shut off"), PowerState::Off);
        assert_eq!(power_state_from_native("pmsuspended"), PowerState::Unknown);
    }

    #[test]
    fn native_boot_devices_normalize_lossily() {
        assert_eq!(boot_device_from_native("network"), BootDevice::Pxe);
        assert_eq!(boot_device_from_native("hd"), BootDevice::Hdd);
        assert_eq!(boot_device_from_native("floppy"), BootDevice::Unknown);
    }

    #[test]
    fn on_when_already_on_is_a_noop() {
        assert_eq!(plan(PowerState::On, PowerAction::On), Transition::None);
        assert_eq!(plan(PowerState::On, PowerAction::ForceOn), Transition::None);
        assert_eq!(plan(PowerState::Off, PowerAction::On), Transition::Start);
    }

    #[test]
    fn stop_when_already_off_is_a_noop() {
        assert_eq!(plan(PowerState::Off, PowerAction::ForceOff), Transition::None);
        assert_eq!(
            plan(PowerState::Off, PowerAction::GracefulShutdown),
            Transition::None
        );
        assert_eq!(
            plan(PowerState::On, PowerAction::GracefulShutdown),
            Transition::GracefulStop
        );
    }

    #[test]
    fn restart_from_off_degrades_to_start() {
        assert_eq!(
            plan(PowerState::Off, PowerAction::GracefulRestart),
            Transition::Start
        );
        assert_eq!(
            plan(PowerState::On, PowerAction::ForceRestart),
            Transition::Restart { graceful: false }
        );
    }

    #[test]
    fn unknown_state_never_proves_a_noop() {
        assert_eq!(plan(PowerState::Unknown, PowerAction::On), Transition::Start);
        assert_eq!(
            plan(PowerState::Unknown, PowerAction::ForceOff),
            Transition::ForceStop
        );
    }

    #[test]
    fn nmi_leaves_power_state_alone() {
        assert_eq!(plan(PowerState::On, PowerAction::Nmi), Transition::Nmi);
        assert_eq!(plan(PowerState::Off, PowerAction::Nmi), Transition::Nmi);
    }
}
