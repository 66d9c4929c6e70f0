use std::collections::BTreeMap;
use std::path::Path;

use facet::Facet;

use crate::error::RedfinError;

/// Top-level emulator configuration: one entry per backend the registry
/// should bring up.
#[derive(Debug, Clone, Default, Facet)]
#[facet(default)]
pub struct Config {
    #[facet(default)]
    pub backends: BTreeMap<String, BackendConfig>,
}

/// Construction-time parameters for one backend driver.
#[derive(Debug, Clone, Default, Facet)]
#[facet(default)]
pub struct BackendConfig {
    /// Selects the registered driver implementation ("libvirt", "fake", ...).
    pub backend_type: String,
    /// Backend endpoint or URI, e.g. `qemu:///system`.
    #[facet(default)]
    pub connection_target: String,
    #[facet(default)]
    pub credentials: CredentialsConfig,
}

/// Backend auth material. Empty fields mean the backend needs none.
#[derive(Debug, Clone, Default, Facet)]
#[facet(default)]
pub struct CredentialsConfig {
    #[facet(default)]
    pub username: String,
    #[facet(default)]
    pub password: String,
}

// ── validation ────────────────────────────────────────────

fn validate_config(config: &Config) -> Result<(), RedfinError> {
    if config.backends.is_empty() {
        return Err(RedfinError::Validation {
            message: "at least one [backends.<name>] entry is required".into(),
        });
    }
    for (name, backend) in &config.backends {
        if backend.backend_type.is_empty() {
            return Err(RedfinError::Validation {
                message: format!("backend '{name}' is missing backend_type"),
            });
        }
    }
    Ok(())
}

// ── public API ────────────────────────────────────────────

pub fn load_config(path: &Path) -> Result<Config, RedfinError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RedfinError::ConfigLoad {
        path: path.display().to_string(),
        source,
    })?;

    let config: Config = facet_toml::from_str(&contents).map_err(|e| RedfinError::ConfigParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const VALID_TOML: &str = r#"
[backends.dev]
backend_type = "libvirt"
connection_target = "qemu:///system"

[backends.lab]
backend_type = "openstack"
connection_target = "https://cloud.example.org:5000"

[backends.lab.credentials]
username = "admin"
password = "hunter2"
"#;

    #[test]
    fn parse_two_backends() {
        let config: Config = facet_toml::from_str(VALID_TOML).unwrap();
        validate_config(&config).unwrap();
        assert_eq!(config.backends.len(), 2);
        assert_eq!(config.backends["dev"].backend_type, "libvirt");
        assert_eq!(config.backends["dev"].connection_target, "qemu:///system");
        assert!(config.backends["dev"].credentials.username.is_empty());
        assert_eq!(config.backends["lab"].credentials.username, "admin");
    }

    #[test]
    fn validation_rejects_missing_backend_type() {
        let toml = r#"
[backends.dev]
connection_target = "qemu:///system"
"#;
        let config: Config = facet_toml::from_str(toml).unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("backend_type"));
    }

    #[test]
    fn validation_rejects_empty_config() {
        let config = Config::default();
        assert!(matches!(
            validate_config(&config),
            Err(RedfinError::Validation { .. })
        ));
    }

    #[test]
    fn load_config_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redfin.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{VALID_TOML}").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.backends.len(), 2);
    }

    #[test]
    fn load_config_surfaces_missing_file() {
        let err = load_config(Path::new("/nonexistent/redfin.toml")).unwrap_err();
        assert!(matches!(err, RedfinError::ConfigLoad { .. }));
    }
}
