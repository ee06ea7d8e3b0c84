use crate::errors::JwksError;
use crate::models::{JsonWebKey, Jwks};
use serde::Serialize;

/// Key ID of the primary signing key (RSA-4096)
pub const PRIMARY_KEY_ID: &str = "Q93ngDAyTNgdjaPblfooyeT00CFLJV5pWulhwAEg8Sw";

/// Key ID of the secondary signing key (RSA-2048)
pub const SECONDARY_KEY_ID: &str = "CjZ2bP54fm1lEkeHGo_E4UVyc4MbN4fye1i6DrxFaqQ";

const PRIMARY_KEY_MODULUS: &str = "xTcVMXDqrYepPqPmA7cp2QnEe1tGMvb_Y8PAhVt8iJBEydtzP4_lDWTCvwYD65gzcUr0qpU3-RE1qMz2mwCgIE-ngUeIsOJDoYjf_Snx7P5mqv6ADKI3BTJ88IU_kTFIUR97eun3mxQF4ddZUA6VE39ReJSCSNpsMTyqG9NF5WiLrJNkkhPQ1cdd35Jhku1i4Cg--x7RAFIjmw0E4yGEiKJ0scD7cvQFHTRL6fa2M5DVv_cjcGCOjiCzM0hvTA6jqRB2KZOw2YtpGEo_Vi1-68filWvphbplbFsk4nvpx_NpRiQHjeSgtKVUEBg9OrBa6sqTk0kZUvKDwCIAhl2PTVfbN1WuK8FkSSy4z9DMLNNwaQ3Y73objP6mrx7YGZSH6I5z3jlvLENv9jSrdy-NhiEAHagYQVZ_MtAUecutnO_l4cpNGYs6TOGc4OkI782Mgzwxm4acY2szaVgMeozuqFDvlIp7O00F267Cce693ztQdkvT2R7GXnHON8SqMQaCnuCZis431DoCsSKDkzUdiZdLPmkVjQuYVgfERkIM9X7tYyN5Zr2PizVLsT8NSjJy9hAJPcp3Ufh69kXS385NggFhkdkmU1BD72T4e_0E7OImGO7zH5PHrVmbJCNULCO1fBeVYHDKmywHeA6pO9q5WyrCLnWdC9T9xBMWurbmBeU";

const SECONDARY_KEY_MODULUS: &str = "nN8D8DxzqoQJsctdkAGmwEU9aL6zsyLjHP_OkPD2yB3swCEiSbKgvxVDIDh-ClGERR1VHL9tFWbyYfWzOZkLCQT4YmvuilSiQ1wu0j_CEH0dqIvXWIyueoz7ZVyjghpkuuW9RVm84C3zvFm6S7d_kLHKYk0SCpP4RbjcHz-1EGA_p4Vl_nTdz16KOuwkNBxH1LJBqq2e3WXczadYvh-EZGrLip1wIUotjebWZaRJWTaw1jn6ssdaRZhZD3JlRUyGO2clK-ULrl-VCSh_FIi_hf4SGTVMhFK1iAnEGxJ5zJ8FaGHxzu25RAaMtwmN1guW02NH1TPOv1eJtXqQoaykfQ";

const RSA_KEY_TYPE: &str = "RSA";
const RSA_PUBLIC_EXPONENT: &str = "AQAB"; // 65537
const SIGNATURE_USE: &str = "sig";
const SIGNATURE_ALGORITHM: &str = "RS256";

fn rsa_signing_key(kid: &str, modulus: &str) -> JsonWebKey {
    JsonWebKey {
        kty: RSA_KEY_TYPE.to_string(),
        kid: kid.to_string(),
        e: RSA_PUBLIC_EXPONENT.to_string(),
        n: modulus.to_string(),
        use_: SIGNATURE_USE.to_string(),
        alg: SIGNATURE_ALGORITHM.to_string(),
    }
}

/// Get JWKS (JSON Web Key Set) for public key distribution
///
/// Returns the compiled-in public keys in RFC 7517 format, primary key first.
/// The set is rebuilt on every call; nothing is cached or shared.
pub fn get_jwks() -> Jwks {
    Jwks {
        keys: vec![
            rsa_signing_key(PRIMARY_KEY_ID, PRIMARY_KEY_MODULUS),
            rsa_signing_key(SECONDARY_KEY_ID, SECONDARY_KEY_MODULUS),
        ],
    }
}

/// Encode a value as compact JSON
pub fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>, JwksError> {
    Ok(serde_json::to_vec(value)?)
}
