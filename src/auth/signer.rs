//! Single-legged OAuth1 request signing.
//!
//! Implements the HMAC-SHA1 signature scheme from RFC 5849 with a fixed
//! consumer+token pair (no interactive authorization flow). Every call
//! produces a fresh nonce and timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::Url;

use crate::auth::Credentials;
use crate::error::{Error, Result};

/// Percent-encoding set for OAuth1: everything except the RFC 3986
/// unreserved characters.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Nonce length in characters.
const NONCE_LEN: usize = 32;

/// OAuth1 request signer holding the credential pair.
#[derive(Debug, Clone)]
pub struct OauthSigner {
    credentials: Credentials,
}

impl OauthSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// Query parameters are taken from `url`; `form` carries any
    /// form-encoded body parameters (empty for GET requests).
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        form: &[(String, String)],
    ) -> Result<String> {
        self.check_credentials()?;

        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::Signing(format!("system clock before epoch: {}", e)))?
            .as_secs();

        Ok(self.header_with(method, url, form, &nonce, timestamp))
    }

    /// A signing attempt with empty credential fields is fatal for the
    /// request.
    fn check_credentials(&self) -> Result<()> {
        let c = &self.credentials;
        if c.consumer_key.is_empty()
            || c.consumer_secret.is_empty()
            || c.token.is_empty()
            || c.token_secret.is_empty()
        {
            return Err(Error::Signing(
                "credential has one or more empty fields".to_string(),
            ));
        }
        Ok(())
    }

    /// Deterministic core: explicit nonce and timestamp.
    fn header_with(
        &self,
        method: &str,
        url: &Url,
        form: &[(String, String)],
        nonce: &str,
        timestamp: u64,
    ) -> String {
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.credentials.token.clone()),
            ("oauth_version", "1.0".to_string()),
        ];

        let base_string = self.signature_base_string(method, url, form, &oauth_params);
        let signature = self.sign(&base_string);

        // Header params are the oauth_* set plus the signature, sorted.
        let mut header_params: Vec<(String, String)> = oauth_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        header_params.push(("oauth_signature".to_string(), signature));
        header_params.sort();

        let joined = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", joined)
    }

    /// Build the signature base string: method, normalized URL, and the
    /// alphabetically sorted parameter set (query + form + oauth_*).
    fn signature_base_string(
        &self,
        method: &str,
        url: &Url,
        form: &[(String, String)],
        oauth_params: &[(&str, String)],
    ) -> String {
        let mut params: Vec<(String, String)> = Vec::new();

        for (k, v) in url.query_pairs() {
            params.push((percent_encode(&k), percent_encode(&v)));
        }
        for (k, v) in form {
            params.push((percent_encode(k), percent_encode(v)));
        }
        for (k, v) in oauth_params {
            params.push((percent_encode(k), percent_encode(v)));
        }

        params.sort();

        let param_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        // Base URL is scheme://host/path without query or fragment.
        let base_url = format!(
            "{}://{}{}",
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path()
        );

        format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(&base_url),
            percent_encode(&param_string)
        )
    }

    /// HMAC-SHA1 over the base string, base64-encoded.
    fn sign(&self, base_string: &str) -> String {
        let key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.token_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }
}

fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture from the Twitter API documentation on signing requests.
    fn doc_signer() -> OauthSigner {
        OauthSigner::new(Credentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        })
    }

    const DOC_NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const DOC_TIMESTAMP: u64 = 1318622958;

    #[test]
    fn test_documented_base_string() {
        let signer = doc_signer();
        let url =
            Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
                .unwrap();
        let form = vec![(
            "status".to_string(),
            "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
        )];
        let oauth_params = [
            ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog".to_string()),
            ("oauth_nonce", DOC_NONCE.to_string()),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", DOC_TIMESTAMP.to_string()),
            (
                "oauth_token",
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            ),
            ("oauth_version", "1.0".to_string()),
        ];

        let base = signer.signature_base_string("post", &url, &form, &oauth_params);

        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&\
             include_entities%3Dtrue%26\
             oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26\
             oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26\
             oauth_signature_method%3DHMAC-SHA1%26\
             oauth_timestamp%3D1318622958%26\
             oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26\
             oauth_version%3D1.0%26\
             status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
        );
    }

    #[test]
    fn test_documented_signature() {
        let signer = doc_signer();
        let url =
            Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
                .unwrap();
        let form = vec![(
            "status".to_string(),
            "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
        )];

        let header = signer.header_with("POST", &url, &form, DOC_NONCE, DOC_TIMESTAMP);

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_signature=\"tnnArxj06cWHq44gCs1OSKk%2FjLY%3D\""));
    }

    #[test]
    fn test_header_contains_all_oauth_params() {
        let signer = doc_signer();
        let url = Url::parse("https://api.twitter.com/1.1/statuses/user_timeline.json?screen_name=alice&count=200").unwrap();

        let header = signer.authorization_header("GET", &url, &[]).unwrap();

        for key in [
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_token",
            "oauth_version",
        ] {
            assert!(header.contains(key), "missing {}: {}", key, header);
        }
        // Query params belong in the signature, not the header.
        assert!(!header.contains("screen_name"));
    }

    #[test]
    fn test_empty_credential_field_is_fatal() {
        let signer = OauthSigner::new(Credentials {
            consumer_key: String::new(),
            consumer_secret: "cs".to_string(),
            token: "tk".to_string(),
            token_secret: "ts".to_string(),
        });
        let url = Url::parse("https://example.com/x").unwrap();

        assert!(matches!(
            signer.authorization_header("GET", &url, &[]),
            Err(Error::Signing(_))
        ));
    }

    #[test]
    fn test_percent_encode_unreserved() {
        assert_eq!(percent_encode("abc-._~123"), "abc-._~123");
        assert_eq!(percent_encode("a b+c"), "a%20b%2Bc");
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
    }
}
