/// The only signature algorithm this engine produces.
pub const SIGNATURE_ALGORITHM: &str = "rsa-sha256";

/// Content type signed for write requests.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default config path.
pub const OCI_CONFIG_PATH: &str = "~/.oci/config";
/// Default profile name.
pub const OCI_DEFAULT_PROFILE: &str = "DEFAULT";

/// Environment variables for credential loading.
pub const OCI_COMPARTMENT: &str = "OCI_COMPARTMENT";
pub const OCI_ADMINISTRATOR: &str = "OCI_ADMINISTRATOR";
pub const OCI_FINGERPRINT: &str = "OCI_FINGERPRINT";
pub const OCI_PRIVATE_KEY: &str = "OCI_PRIVATE_KEY";
pub const OCI_KEY_FILE: &str = "OCI_KEY_FILE";
pub const OCI_CONFIG_FILE: &str = "OCI_CONFIG_FILE";
pub const OCI_PROFILE: &str = "OCI_PROFILE";
