use miette::Diagnostic;
use thiserror::Error;

/// Every failure crossing the driver contract is one of these variants.
/// Backend-native errors must be re-expressed here at the driver boundary;
/// no backend-specific error type leaks through to the protocol layer.
#[derive(Debug, Error, Diagnostic)]
pub enum RedfinError {
    #[error("system '{identity}' was not found")]
    SystemNotFound { identity: String },

    #[error("identity '{identity}' matches {count} systems")]
    #[diagnostic(help("address the system by its UUID instead of its name"))]
    AmbiguousIdentity { identity: String, count: usize },

    #[error("no driver registered for backend type '{backend_type}'")]
    UnknownDriverType { backend_type: String },

    #[error("operation not supported: {operation}")]
    UnsupportedOperation { operation: String },

    #[error("invalid boot device '{device}': expected one of Pxe, Hdd, Cd")]
    InvalidBootDevice { device: String },

    #[error("power action {action} on '{identity}' failed: {message}")]
    PowerOperationFailed {
        identity: String,
        action: String,
        message: String,
    },

    #[error("setting boot device on '{identity}' failed: {message}")]
    BootDeviceSetFailed { identity: String, message: String },

    #[error("backend unreachable: {message}")]
    BackendUnavailable { message: String },

    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_absent_from_unsupported() {
        let absent = RedfinError::SystemNotFound {
            identity: "node0".into(),
        };
        assert_eq!(absent.to_string(), "system 'node0' was not found");

        let unsupported = RedfinError::UnsupportedOperation {
            operation: "Nmi injection".into(),
        };
        assert_eq!(
            unsupported.to_string(),
            "operation not supported: Nmi injection"
        );
    }

    #[test]
    fn invalid_boot_device_names_the_accepted_set() {
        let err = RedfinError::InvalidBootDevice {
            device: "Floppy".into(),
        };
        assert!(err.to_string().contains("Pxe, Hdd, Cd"));
    }
}
