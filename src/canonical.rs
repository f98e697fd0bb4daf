//! Canonical signing input construction.
//!
//! The canonical header set is the ordered list of `(name, value)` pairs a
//! signature covers. Order comes from [`SigningMethod::signed_headers`] and
//! is never sorted afterwards: the receiving service rebuilds the exact same
//! lines from the declared header list.

use crate::constants::CONTENT_TYPE_JSON;
use crate::hash::base64_sha256;
use crate::method::SigningMethod;

/// Build the ordered canonical header set for one request.
///
/// `(request-target)` is synthesized from the method token and the path.
/// For write methods the body-derived headers (`content-length`,
/// `content-type`, `x-content-sha256`) are computed here; callers enforce
/// body presence before reaching this point, read methods ignore any body
/// they are given.
pub(crate) fn canonical_headers(
    method: SigningMethod,
    date_header: &str,
    path: &str,
    host_header: &str,
    body: Option<&[u8]>,
) -> Vec<(&'static str, String)> {
    let names = method.signed_headers();
    let mut headers = Vec::with_capacity(names.len());

    for name in names {
        let value = match *name {
            "date" => date_header.to_string(),
            "(request-target)" => format!("{} {}", method.as_str(), path),
            "host" => host_header.to_string(),
            "content-length" => body.unwrap_or_default().len().to_string(),
            "content-type" => CONTENT_TYPE_JSON.to_string(),
            "x-content-sha256" => base64_sha256(body.unwrap_or_default()),
            _ => unreachable!("unknown signed header name: {name}"),
        };
        headers.push((*name, value));
    }

    headers
}

/// Render the canonical header set into the exact string that gets signed.
///
/// Lines are `<name>: <value>` joined by a single `\n` with no trailing
/// newline. Any deviation here produces a signature the service rejects.
pub(crate) fn string_to_sign(headers: &[(&'static str, String)]) -> String {
    let mut s = String::with_capacity(headers.iter().map(|(k, v)| k.len() + v.len() + 3).sum());

    for (idx, (name, value)) in headers.iter().enumerate() {
        if idx != 0 {
            s.push('\n');
        }
        s.push_str(name);
        s.push_str(": ");
        s.push_str(value);
    }

    s
}
