use serde::{Deserialize, Serialize};

/// JWKS response (RFC 7517)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<JsonWebKey>,
}

/// JSON Web Key (RFC 7517)
///
/// Field order matches the published document: `kty`, `kid`, `e`, `n`, `use`, `alg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String, // Key Type ("RSA")
    pub kid: String, // Key ID
    pub e: String,   // Public exponent (base64url)
    pub n: String,   // Modulus (base64url)
    #[serde(rename = "use")]
    pub use_: String, // Public key use ("sig")
    pub alg: String, // Algorithm ("RS256")
}

impl Jwks {
    /// Look up a key by its `kid`
    pub fn find(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|key| key.kid == kid)
    }

    /// Whether every `kid` in the set appears exactly once
    pub fn has_unique_kids(&self) -> bool {
        self.keys
            .iter()
            .enumerate()
            .all(|(i, key)| self.keys.iter().skip(i + 1).all(|other| other.kid != key.kid))
    }
}
