use crate::canonical::{canonical_headers, string_to_sign};
use crate::constants::SIGNATURE_ALGORITHM;
use crate::error::{Error, Result};
use crate::hash::base64_encode;
use crate::method::SigningMethod;
use log::debug;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _};
use rsa::RsaPrivateKey;

/// A ready-to-use signer for one `(method, identity)` pair.
///
/// Holds the parsed key material and the fixed header configuration for its
/// method. Construction happens once per pair through
/// [`SignerCache`](crate::SignerCache); signing itself is cheap and
/// lock-free.
#[derive(Debug)]
pub struct Signer {
    key_id: String,
    method: SigningMethod,
    signing_key: SigningKey<Sha256>,
}

impl Signer {
    pub(crate) fn new(method: SigningMethod, key_id: String, private_key: RsaPrivateKey) -> Self {
        Self {
            key_id,
            method,
            signing_key: SigningKey::new(private_key),
        }
    }

    /// Sign one request, producing the pieces of the `Authorization` value.
    ///
    /// PKCS#1 v1.5 is deterministic, so identical inputs always produce an
    /// identical signature.
    pub fn sign(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        body: Option<&[u8]>,
    ) -> Result<SignatureResult> {
        if self.method.requires_body() && body.is_none() {
            return Err(Error::request_invalid(format!(
                "{} requests must carry a body",
                self.method.as_str()
            )));
        }

        let headers = canonical_headers(self.method, date_header, path, host_header, body);
        let string_to_sign = string_to_sign(&headers);
        debug!("string to sign: {}", &string_to_sign);

        let signature = self
            .signing_key
            .try_sign(string_to_sign.as_bytes())
            .map_err(|e| Error::signing_failed("rsa-sha256 signing failed").with_source(e))?;

        Ok(SignatureResult {
            key_id: self.key_id.clone(),
            algorithm: SIGNATURE_ALGORITHM,
            headers: self.method.signed_headers(),
            signature: base64_encode(&signature.to_bytes()),
        })
    }
}

/// The output of one signing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureResult {
    key_id: String,
    algorithm: &'static str,
    headers: &'static [&'static str],
    signature: String,
}

impl SignatureResult {
    /// The credential identity carried in `keyId`.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The signature algorithm name.
    pub fn algorithm(&self) -> &str {
        self.algorithm
    }

    /// The header names actually signed, in signing order.
    pub fn headers(&self) -> &[&str] {
        self.headers
    }

    /// The base64 encoded signature value.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Render the `Authorization` header value.
    ///
    /// The `Signature ` scheme prefix is left to the caller; some services
    /// want it, some gateways strip it.
    pub fn to_header_value(&self) -> String {
        format!(
            "keyId=\"{}\",algorithm=\"{}\",headers=\"{}\",signature=\"{}\"",
            self.key_id,
            self.algorithm,
            self.headers.join(" "),
            self.signature
        )
    }
}
