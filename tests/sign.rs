//! End-to-end signing tests with a fixed RSA-2048 key, verifying produced
//! signatures independently against the corresponding public key.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use ocisign::{ApiSigner, Credential, SigningMethod};
use pretty_assertions::assert_eq;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePrivateKey;
use rsa::sha2::Sha256;
use rsa::signature::Verifier;
use rsa::RsaPrivateKey;

const PKCS8_PEM: &str = include_str!("fixtures/rsa2048_pkcs8.pem");
const PKCS1_PEM: &str = include_str!("fixtures/rsa2048_pkcs1.pem");

const DATE: &str = "Thu, 05 Jan 2023 12:00:00 GMT";
const HOST: &str = "example.com";

fn test_credential() -> Credential {
    Credential::new("c1", "a1", "fp1", PKCS8_PEM)
}

fn verifying_key() -> VerifyingKey<Sha256> {
    let private = RsaPrivateKey::from_pkcs8_pem(PKCS8_PEM).unwrap();
    VerifyingKey::new(private.to_public_key())
}

/// Pull one `name="value"` field out of an authorization header value.
fn field<'a>(header: &'a str, name: &str) -> &'a str {
    let start = header
        .find(&format!("{name}=\""))
        .unwrap_or_else(|| panic!("field {name} not present in {header}"))
        + name.len()
        + 2;
    let end = header[start..].find('"').unwrap() + start;
    &header[start..end]
}

fn verify(header: &str, canonical: &str) {
    let sig_bytes = BASE64_STANDARD.decode(field(header, "signature")).unwrap();
    let signature = Signature::try_from(sig_bytes.as_slice()).unwrap();
    verifying_key()
        .verify(canonical.as_bytes(), &signature)
        .unwrap();
}

#[test]
fn test_sign_get_end_to_end() {
    let signer = ApiSigner::new();
    let header = signer
        .sign_get(DATE, "/v1/items", HOST, &test_credential())
        .unwrap();

    assert_eq!(field(&header, "keyId"), "c1/a1/fp1");
    assert_eq!(field(&header, "algorithm"), "rsa-sha256");
    assert_eq!(field(&header, "headers"), "date (request-target) host");

    verify(
        &header,
        "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
         (request-target): get /v1/items\n\
         host: example.com",
    );
}

#[test]
fn test_sign_head_and_delete_share_the_read_header_list() {
    let signer = ApiSigner::new();
    let cred = test_credential();

    let head = signer.sign_head(DATE, "/v1/items", HOST, &cred).unwrap();
    assert_eq!(field(&head, "headers"), "date (request-target) host");
    verify(
        &head,
        "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
         (request-target): head /v1/items\n\
         host: example.com",
    );

    let delete = signer
        .sign_delete(DATE, "/v1/items/1", HOST, &cred)
        .unwrap();
    verify(
        &delete,
        "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
         (request-target): delete /v1/items/1\n\
         host: example.com",
    );
}

#[test]
fn test_sign_post_covers_body_headers() {
    let signer = ApiSigner::new();
    let header = signer
        .sign_post(DATE, "/v1/items", HOST, b"{}", &test_credential())
        .unwrap();

    assert_eq!(
        field(&header, "headers"),
        "date (request-target) host content-length content-type x-content-sha256"
    );

    verify(
        &header,
        "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
         (request-target): post /v1/items\n\
         host: example.com\n\
         content-length: 2\n\
         content-type: application/json\n\
         x-content-sha256: RBNvo1WzZ4oRRq0W9+hknpT7T8If536DEMBg9hyq/4o=",
    );
}

#[test]
fn test_sign_put_covers_body_headers() {
    let signer = ApiSigner::new();
    let body = br#"{"name":"item"}"#;
    let header = signer
        .sign_put(DATE, "/v1/items/1", HOST, body, &test_credential())
        .unwrap();

    let digest = {
        use sha2::Digest;
        BASE64_STANDARD.encode(sha2::Sha256::digest(body))
    };
    verify(
        &header,
        &format!(
            "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
             (request-target): put /v1/items/1\n\
             host: example.com\n\
             content-length: {}\n\
             content-type: application/json\n\
             x-content-sha256: {digest}",
            body.len()
        ),
    );
}

#[test]
fn test_signing_is_idempotent() {
    let signer = ApiSigner::new();
    let cred = test_credential();

    let first = signer
        .sign_post(DATE, "/v1/items", HOST, b"{}", &cred)
        .unwrap();
    let second = signer
        .sign_post(DATE, "/v1/items", HOST, b"{}", &cred)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pkcs1_key_signs_identically_to_pkcs8() {
    let signer = ApiSigner::new();
    let pkcs8 = signer
        .sign_get(DATE, "/v1/items", HOST, &test_credential())
        .unwrap();

    // Same key in PKCS#1 clothing under a different identity, so the cache
    // does not short-circuit the parse.
    let signer = ApiSigner::new();
    let cred = Credential::new("c1", "a1", "fp1", PKCS1_PEM);
    let pkcs1 = signer.sign_get(DATE, "/v1/items", HOST, &cred).unwrap();

    assert_eq!(pkcs8, pkcs1);
}

#[test]
fn test_query_string_is_signed_verbatim() {
    let signer = ApiSigner::new();
    let path = "/v1/items?limit=10&page=2";
    let header = signer
        .sign_get(DATE, path, HOST, &test_credential())
        .unwrap();

    verify(
        &header,
        &format!(
            "date: Thu, 05 Jan 2023 12:00:00 GMT\n\
             (request-target): get {path}\n\
             host: example.com"
        ),
    );
}

#[test]
fn test_parameterized_sign_matches_method_entry_points() {
    let signer = ApiSigner::new();
    let cred = test_credential();

    let via_enum = signer
        .sign(SigningMethod::Delete, DATE, "/v1/items/1", HOST, None, &cred)
        .unwrap();
    let via_entry_point = signer.sign_delete(DATE, "/v1/items/1", HOST, &cred).unwrap();
    assert_eq!(via_enum, via_entry_point);
}
