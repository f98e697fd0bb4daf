use crate::error::{Error, Result};

/// Header list signed for read-style requests.
const SIGNED_HEADERS_BASIC: &[&str] = &["date", "(request-target)", "host"];

/// Header list signed for write-style requests carrying a body.
const SIGNED_HEADERS_BODY: &[&str] = &[
    "date",
    "(request-target)",
    "host",
    "content-length",
    "content-type",
    "x-content-sha256",
];

/// HTTP methods this engine can sign.
///
/// The method decides the fixed, ordered list of headers that go into the
/// signature and whether a request body is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningMethod {
    /// HTTP GET.
    Get,
    /// HTTP HEAD.
    Head,
    /// HTTP DELETE.
    Delete,
    /// HTTP PUT.
    Put,
    /// HTTP POST.
    Post,
}

impl SigningMethod {
    /// The lowercase method token, as rendered into `(request-target)`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningMethod::Get => "get",
            SigningMethod::Head => "head",
            SigningMethod::Delete => "delete",
            SigningMethod::Put => "put",
            SigningMethod::Post => "post",
        }
    }

    /// The ordered header names signed for this method.
    ///
    /// Order is part of the signature contract: the receiving service
    /// rebuilds the signing string from the declared list, so the names
    /// here must match the signed lines one-to-one.
    pub fn signed_headers(&self) -> &'static [&'static str] {
        match self {
            SigningMethod::Get | SigningMethod::Head | SigningMethod::Delete => {
                SIGNED_HEADERS_BASIC
            }
            SigningMethod::Put | SigningMethod::Post => SIGNED_HEADERS_BODY,
        }
    }

    /// Whether signing this method requires a request body.
    pub fn requires_body(&self) -> bool {
        matches!(self, SigningMethod::Put | SigningMethod::Post)
    }

    /// Map an [`http::Method`] to a signing method.
    ///
    /// Methods outside the supported five cannot be signed with a fixed
    /// header table and are rejected.
    pub fn from_http(method: &http::Method) -> Result<Self> {
        match method.as_str() {
            "GET" => Ok(SigningMethod::Get),
            "HEAD" => Ok(SigningMethod::Head),
            "DELETE" => Ok(SigningMethod::Delete),
            "PUT" => Ok(SigningMethod::Put),
            "POST" => Ok(SigningMethod::Post),
            _ => Err(Error::request_invalid(format!(
                "method {method} is not supported for signing"
            ))),
        }
    }
}
