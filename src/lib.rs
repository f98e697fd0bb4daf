//! HTTP Signature authentication for Oracle Cloud Infrastructure style
//! REST APIs.
//!
//! For each outbound request this crate builds the canonical signing string
//! from a fixed, method-dependent header list (including the synthetic
//! `(request-target)` pseudo-header), signs it with an RSA private key
//! using SHA-256 (PKCS#1 v1.5), and returns the value to place in the
//! request's `Authorization` header.
//!
//! ## Overview
//!
//! - [`Credential`] identifies the API key: compartment, administrator,
//!   fingerprint, and the PEM private key. Credentials can be supplied
//!   directly or loaded from environment variables or an `~/.oci/config`
//!   style profile file.
//! - [`ApiSigner`] is the entry point, with one signing operation per
//!   supported HTTP method. It owns a [`SignerCache`] so each distinct
//!   `(method, identity)` pair parses its PEM key exactly once.
//! - GET, HEAD and DELETE sign `date`, `(request-target)` and `host`;
//!   PUT and POST additionally sign `content-length`, `content-type`
//!   (always `application/json`) and `x-content-sha256`, the base64 SHA-256
//!   digest of the body.
//!
//! ## Example
//!
//! ```no_run
//! use ocisign::{ApiSigner, Credential};
//!
//! # fn main() -> ocisign::Result<()> {
//! let cred = Credential::new(
//!     "ocid1.compartment.oc1..aaaa",
//!     "ocid1.user.oc1..bbbb",
//!     "11:22:33:44",
//!     include_str!("../tests/fixtures/rsa2048_pkcs8.pem"),
//! );
//!
//! let signer = ApiSigner::new();
//! let authorization = signer.sign_get(
//!     "Thu, 05 Jan 2023 12:00:00 GMT",
//!     "/20160918/instances?compartmentId=ocid1.compartment.oc1..aaaa",
//!     "iaas.us-phoenix-1.oraclecloud.com",
//!     &cred,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! The returned value does not carry the `Signature ` scheme prefix;
//! prepend it if the target API requires it, or use
//! [`ApiSigner::sign_parts`] to stamp a full [`http::request::Parts`]
//! in place.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod constants;

mod error;
pub use error::{Error, ErrorKind, Result};

mod credential;
pub use credential::Credential;

mod method;
pub use method::SigningMethod;

mod canonical;

mod key;

mod signer;
pub use signer::{SignatureResult, Signer};

mod cache;
pub use cache::SignerCache;

mod sign;
pub use sign::ApiSigner;
