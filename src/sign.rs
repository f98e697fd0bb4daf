use crate::cache::SignerCache;
use crate::constants::CONTENT_TYPE_JSON;
use crate::credential::Credential;
use crate::error::{Error, Result};
use crate::hash::base64_sha256;
use crate::method::SigningMethod;
use crate::time::{format_http_date, now};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE};
use http::HeaderValue;

/// The signing facade.
///
/// Owns its own [`SignerCache`], so two `ApiSigner` instances never share
/// parsed key material; create one per process (or per test) and reuse it
/// across requests.
///
/// The string-returning entry points produce the bare `Authorization`
/// value; prepend the `Signature ` scheme yourself if the target API
/// requires it. [`ApiSigner::sign_parts`] writes the wire header directly
/// and includes the prefix.
pub struct ApiSigner {
    cache: SignerCache,
}

impl ApiSigner {
    /// Create a signer with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: SignerCache::new(),
        }
    }

    /// Sign one request for any supported method.
    ///
    /// `path` must be the absolute request path including any query string,
    /// exactly as sent on the wire; `date_header` must be RFC-1123 / GMT
    /// formatted. PUT and POST require a body, the read methods ignore one.
    pub fn sign(
        &self,
        method: SigningMethod,
        date_header: &str,
        path: &str,
        host_header: &str,
        body: Option<&[u8]>,
        cred: &Credential,
    ) -> Result<String> {
        let signer = self.cache.get_or_create(method, cred)?;
        let result = signer.sign(date_header, path, host_header, body)?;

        Ok(result.to_header_value())
    }

    /// Sign a GET request.
    pub fn sign_get(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        cred: &Credential,
    ) -> Result<String> {
        self.sign(SigningMethod::Get, date_header, path, host_header, None, cred)
    }

    /// Sign a HEAD request.
    pub fn sign_head(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        cred: &Credential,
    ) -> Result<String> {
        self.sign(SigningMethod::Head, date_header, path, host_header, None, cred)
    }

    /// Sign a DELETE request.
    pub fn sign_delete(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        cred: &Credential,
    ) -> Result<String> {
        self.sign(SigningMethod::Delete, date_header, path, host_header, None, cred)
    }

    /// Sign a PUT request carrying `body`.
    pub fn sign_put(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        body: &[u8],
        cred: &Credential,
    ) -> Result<String> {
        self.sign(
            SigningMethod::Put,
            date_header,
            path,
            host_header,
            Some(body),
            cred,
        )
    }

    /// Sign a POST request carrying `body`.
    pub fn sign_post(
        &self,
        date_header: &str,
        path: &str,
        host_header: &str,
        body: &[u8],
        cred: &Credential,
    ) -> Result<String> {
        self.sign(
            SigningMethod::Post,
            date_header,
            path,
            host_header,
            Some(body),
            cred,
        )
    }

    /// Sign an [`http::request::Parts`] in place.
    ///
    /// Method, path and host are taken from the parts; a `Date` header is
    /// injected from the current time when absent. For PUT and POST the
    /// body-derived headers (`content-length`, `content-type`,
    /// `x-content-sha256`) are injected as well, so the wire headers always
    /// match the signed values. The `Authorization` header is written with
    /// the `Signature ` scheme prefix.
    pub fn sign_parts(
        &self,
        parts: &mut http::request::Parts,
        body: Option<&[u8]>,
        cred: &Credential,
    ) -> Result<()> {
        let method = SigningMethod::from_http(&parts.method)?;

        if method.requires_body() {
            let body = body.ok_or_else(|| {
                Error::request_invalid(format!(
                    "{} requests must carry a body",
                    method.as_str()
                ))
            })?;
            parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
            parts
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
            parts
                .headers
                .insert("x-content-sha256", HeaderValue::from_str(&base64_sha256(body))?);
        }

        let host = parts
            .uri
            .authority()
            .ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?
            .to_string();
        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        let date_header = match parts.headers.get(DATE) {
            Some(v) => v
                .to_str()
                .map_err(|e| {
                    Error::request_invalid("date header is not valid UTF-8").with_source(e)
                })?
                .to_string(),
            None => {
                let date = format_http_date(now());
                parts.headers.insert(DATE, HeaderValue::from_str(&date)?);
                date
            }
        };

        let value = self.sign(method, &date_header, &path, &host, body, cred)?;
        parts
            .headers
            .insert(AUTHORIZATION, HeaderValue::from_str(&format!("Signature {value}"))?);

        Ok(())
    }
}

impl Default for ApiSigner {
    fn default() -> Self {
        Self::new()
    }
}
