use crate::constants::*;
use crate::error::{Error, Result};
use crate::utils::Redact;
use ini::Ini;
use log::debug;
use std::env;
use std::fmt::{Debug, Formatter};
use std::fs;

/// Credential that identifies the API key used for signing.
///
/// The identity string sent in `keyId` is
/// `compartment_id/administrator_id/key_fingerprint`; the PEM key material
/// itself is never part of the identity.
#[derive(Default, Clone)]
pub struct Credential {
    /// Compartment OCID the administrator belongs to.
    pub compartment_id: String,
    /// Administrator OCID owning the API key.
    pub administrator_id: String,
    /// Fingerprint of the API key.
    pub key_fingerprint: String,
    /// PEM encoded RSA private key (PKCS#1 or PKCS#8).
    pub private_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("compartment_id", &self.compartment_id)
            .field("administrator_id", &self.administrator_id)
            .field("key_fingerprint", &self.key_fingerprint)
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

impl Credential {
    /// Create a new credential from its parts.
    pub fn new(
        compartment_id: &str,
        administrator_id: &str,
        key_fingerprint: &str,
        private_key: &str,
    ) -> Self {
        Self {
            compartment_id: compartment_id.to_string(),
            administrator_id: administrator_id.to_string(),
            key_fingerprint: key_fingerprint.to_string(),
            private_key: private_key.to_string(),
        }
    }

    /// The identity string carried in `keyId`.
    pub fn identity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.compartment_id, self.administrator_id, self.key_fingerprint
        )
    }

    /// Load a credential from environment variables.
    ///
    /// Reads `OCI_COMPARTMENT`, `OCI_ADMINISTRATOR`, `OCI_FINGERPRINT` and
    /// either `OCI_PRIVATE_KEY` (inline PEM) or `OCI_KEY_FILE` (path to a
    /// PEM file, `~` expanded). Returns `Ok(None)` when the variables are
    /// incomplete.
    pub fn from_env() -> Result<Option<Self>> {
        let compartment = env::var(OCI_COMPARTMENT).ok();
        let administrator = env::var(OCI_ADMINISTRATOR).ok();
        let fingerprint = env::var(OCI_FINGERPRINT).ok();

        let (Some(compartment), Some(administrator), Some(fingerprint)) =
            (compartment, administrator, fingerprint)
        else {
            debug!("credential env vars incomplete, skipping");
            return Ok(None);
        };

        let private_key = if let Ok(pem) = env::var(OCI_PRIVATE_KEY) {
            pem
        } else if let Ok(path) = env::var(OCI_KEY_FILE) {
            read_key_file(&path)?
        } else {
            debug!("neither {OCI_PRIVATE_KEY} nor {OCI_KEY_FILE} is set, skipping");
            return Ok(None);
        };

        Ok(Some(Self {
            compartment_id: compartment,
            administrator_id: administrator,
            key_fingerprint: fingerprint,
            private_key,
        }))
    }

    /// Load a credential from a config file profile.
    ///
    /// The file is INI formatted, one section per profile, with keys
    /// `compartment`, `administrator`, `fingerprint` and `key_file`
    /// (a PEM file path, `~` expanded).
    pub fn from_config_file(path: &str, profile: &str) -> Result<Self> {
        let expanded = expand_home(path);
        let content = fs::read_to_string(&expanded).map_err(|e| {
            Error::config_invalid(format!("failed to read config file {expanded}")).with_source(e)
        })?;

        let ini = Ini::read_from(&mut content.as_bytes())
            .map_err(|e| Error::config_invalid("failed to parse config file").with_source(e))?;
        let section = ini.section(Some(profile)).ok_or_else(|| {
            Error::config_invalid(format!("profile {profile} not found in config file"))
        })?;

        match (
            section.get("compartment"),
            section.get("administrator"),
            section.get("fingerprint"),
            section.get("key_file"),
        ) {
            (Some(compartment), Some(administrator), Some(fingerprint), Some(key_file)) => {
                debug!("loading credential from config file profile {profile}");
                Ok(Self {
                    compartment_id: compartment.to_string(),
                    administrator_id: administrator.to_string(),
                    key_fingerprint: fingerprint.to_string(),
                    private_key: read_key_file(key_file)?,
                })
            }
            _ => Err(Error::config_invalid(format!(
                "profile {profile} is missing one of compartment, administrator, fingerprint, key_file"
            ))),
        }
    }

    /// Load a credential from the default config file location.
    ///
    /// The path defaults to `~/.oci/config` and the profile to `DEFAULT`;
    /// both can be overridden via `OCI_CONFIG_FILE` and `OCI_PROFILE`.
    pub fn from_default_config_file() -> Result<Self> {
        let path = env::var(OCI_CONFIG_FILE).unwrap_or_else(|_| OCI_CONFIG_PATH.to_string());
        let profile = env::var(OCI_PROFILE).unwrap_or_else(|_| OCI_DEFAULT_PROFILE.to_string());

        Self::from_config_file(&path, &profile)
    }
}

fn read_key_file(path: &str) -> Result<String> {
    let expanded = expand_home(path);
    fs::read_to_string(&expanded)
        .map_err(|e| Error::key_load(format!("failed to read key file {expanded}")).with_source(e))
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }

    path.to_string()
}
