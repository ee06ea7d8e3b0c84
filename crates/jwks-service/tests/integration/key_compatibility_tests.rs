//! The published document must be usable by real JWT verifiers

use crate::support::send;
use axum::http::Method;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet, KeyAlgorithm, PublicKeyUse};
use jsonwebtoken::DecodingKey;
use jwks_service::services::key_set_service::{get_jwks, PRIMARY_KEY_ID, SECONDARY_KEY_ID};

#[test]
fn test_moduli_are_base64url_rsa_keys() -> Result<(), anyhow::Error> {
    let jwks = get_jwks();

    let primary = jwks
        .find(PRIMARY_KEY_ID)
        .ok_or_else(|| anyhow::anyhow!("primary key missing"))?;
    let secondary = jwks
        .find(SECONDARY_KEY_ID)
        .ok_or_else(|| anyhow::anyhow!("secondary key missing"))?;

    // RSA-4096 and RSA-2048
    assert_eq!(URL_SAFE_NO_PAD.decode(&primary.n)?.len(), 512);
    assert_eq!(URL_SAFE_NO_PAD.decode(&secondary.n)?.len(), 256);

    for key in &jwks.keys {
        assert_eq!(URL_SAFE_NO_PAD.decode(&key.e)?, vec![1, 0, 1]);
    }

    Ok(())
}

#[tokio::test]
async fn test_body_parses_as_jwk_set() -> Result<(), anyhow::Error> {
    let response = send(Method::GET, "/keys").await?;
    let set: JwkSet = serde_json::from_slice(&response.body)?;

    assert_eq!(set.keys.len(), 2);

    for kid in [PRIMARY_KEY_ID, SECONDARY_KEY_ID] {
        let jwk = set
            .find(kid)
            .ok_or_else(|| anyhow::anyhow!("kid {} not found", kid))?;

        assert_eq!(jwk.common.key_algorithm, Some(KeyAlgorithm::RS256));
        assert_eq!(jwk.common.public_key_use, Some(PublicKeyUse::Signature));
        assert!(matches!(jwk.algorithm, AlgorithmParameters::RSA(_)));

        DecodingKey::from_jwk(jwk)?;
    }

    Ok(())
}

#[test]
fn test_rsa_components_build_decoding_keys() -> Result<(), anyhow::Error> {
    for key in get_jwks().keys {
        DecodingKey::from_rsa_components(&key.n, &key.e)?;
    }

    Ok(())
}
