use crate::credential::Credential;
use crate::error::Result;
use crate::key::parse_private_key;
use crate::method::SigningMethod;
use crate::signer::Signer;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cache of ready-to-use signers keyed by `(method, identity)`.
///
/// Parsing PEM key material is by far the most expensive part of signing,
/// so parsed signers are kept for the life of the cache. Entries are never
/// evicted; the cache grows with the number of distinct `(method,
/// identity)` pairs it sees, which is assumed low-cardinality.
///
/// The identity deliberately excludes the key material itself: once an
/// entry exists, the PEM supplied on later calls for the same identity is
/// never re-examined. Rotating a key while reusing the same fingerprint
/// keeps signing with the cached key.
pub struct SignerCache {
    inner: Mutex<HashMap<(SigningMethod, String), Arc<Signer>>>,
}

impl SignerCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the signer for this `(method, identity)` pair, constructing it
    /// from the credential's PEM key on first use.
    ///
    /// Key parsing happens outside the map lock, so concurrent misses for
    /// distinct identities never wait on each other. Racing misses for the
    /// same identity may each parse the key; the first inserted entry wins.
    pub fn get_or_create(&self, method: SigningMethod, cred: &Credential) -> Result<Arc<Signer>> {
        let key = (method, cred.identity());

        if let Some(signer) = self.inner.lock().expect("lock poisoned").get(&key) {
            return Ok(signer.clone());
        }

        debug!("constructing signer for {} {}", method.as_str(), key.1);
        let private_key = parse_private_key(&cred.private_key)?;
        let signer = Arc::new(Signer::new(method, key.1.clone(), private_key));

        let mut map = self.inner.lock().expect("lock poisoned");
        Ok(map.entry(key).or_insert(signer).clone())
    }
}

impl Default for SignerCache {
    fn default() -> Self {
        Self::new()
    }
}
