//! Carrying a token in a link's query string.

use crate::codec::{decode, encode};
use crate::payload::LetterPayload;

/// Query key holding the letter token.
pub const LETTER_QUERY_KEY: &str = "l";

/// Build a shareable link by appending the sealed letter to `base`.
///
/// Any fragment on `base` is dropped; an existing query is kept.
pub fn seal_link(base: &str, payload: &LetterPayload) -> String {
    let base = base.split('#').next().unwrap_or_default();
    let separator = match base.find('?') {
        None => "?",
        Some(_) if base.ends_with('?') || base.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{base}{separator}{LETTER_QUERY_KEY}={}", encode(payload))
}

/// Extract the raw token from a link, or accept a bare token.
///
/// Returns `None` when the link has no letter component or its value is not
/// valid percent-encoding.
pub fn token_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    let Some((_, rest)) = link.split_once('?') else {
        // A bare token has no scheme, leading path or fragment. Standard
        // base64 tokens may carry `/` inside.
        if link.is_empty() || link.contains("://") || link.starts_with('/') || link.contains('#') {
            return None;
        }
        return Some(link.to_string());
    };
    let query = rest.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LETTER_QUERY_KEY)
        .and_then(|(_, value)| percent_decode(value))
        .filter(|token| !token.is_empty())
}

/// Open the letter carried by a link.
///
/// A link without a letter and a link whose letter does not decode are the
/// same thing to the caller: there is no letter.
pub fn letter_from_link(link: &str) -> Option<LetterPayload> {
    let token = token_from_link(link)?;
    decode(&token).ok()
}

/// Decode `%XX` escapes. Other characters pass through unchanged.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input
                .get(i + 1..i + 3)
                .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> LetterPayload {
        LetterPayload::new("Ana", "Bo", "see you at 7 & bring 🌹", None, None, 0.42).unwrap()
    }

    #[test]
    fn test_seal_and_open() {
        let link = seal_link("https://pixel-wind.example/", &letter());
        assert!(link.starts_with("https://pixel-wind.example/?l="));
        assert_eq!(letter_from_link(&link), Some(letter()));
    }

    #[test]
    fn test_seal_keeps_existing_query() {
        let link = seal_link("https://x.example/app?theme=dark#top", &letter());
        assert!(link.starts_with("https://x.example/app?theme=dark&l="));
        assert!(!link.contains('#'));
        assert_eq!(letter_from_link(&link), Some(letter()));
    }

    #[test]
    fn test_percent_encoded_token() {
        // Standard base64 escaped the way a browser escapes a query value.
        let token = "eyJ0byI6IkFuYSIsImZyb20iOiJCbyIsIm1zZzEiOiJoaSIsInNlZWQiOjAuNX0%3D";
        let opened = letter_from_link(&format!("https://x.example/?l={token}#frag")).unwrap();
        assert_eq!(opened.msg1(), "hi");
    }

    #[test]
    fn test_missing_or_invalid_is_none() {
        assert_eq!(letter_from_link("https://x.example/"), None);
        assert_eq!(letter_from_link("https://x.example/?other=1"), None);
        assert_eq!(letter_from_link("https://x.example/?l="), None);
        assert_eq!(letter_from_link("https://x.example/?l=%%%not-a-token%%%"), None);
        assert_eq!(letter_from_link("https://x.example/?l=bm9wZQ"), None);
    }

    #[test]
    fn test_bare_token() {
        let token = encode(&letter());
        assert_eq!(token_from_link(&format!("  {token}\n")), Some(token.clone()));
        assert_eq!(letter_from_link(&token), Some(letter()));
    }

    #[test]
    fn test_bare_standard_base64_token() {
        // Standard alphabet with `/` and `+`, as pasted from another encoder.
        let slash = "eyJ0byI6IkFuYSIsImZyb20iOiJCbyIsIm1zZzEiOiI/Pz8+Pj4iLCJzZWVkIjowLjV9";
        assert!(slash.contains('/') && slash.contains('+'));
        assert_eq!(token_from_link(slash), Some(slash.to_string()));
        assert_eq!(letter_from_link(slash).unwrap().msg1(), "???>>>");

        let padded = "eyJ0byI6IkFuYSIsImZyb20iOiJCbyIsIm1zZzEiOiLDvz8+fiIsInNlZWQiOjAuNX0=";
        assert_eq!(letter_from_link(padded).unwrap().msg1(), "ÿ?>~");
    }

    #[test]
    fn test_paths_are_not_bare_tokens() {
        assert_eq!(token_from_link("https://x.example/app"), None);
        assert_eq!(token_from_link("/app/letter"), None);
        assert_eq!(token_from_link("token#frag"), None);
        assert_eq!(token_from_link("   "), None);
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("a%3Db%26c"), Some("a=b&c".to_string()));
        assert_eq!(percent_decode("%E2%9C%93"), Some("✓".to_string()));
        assert_eq!(percent_decode("%zz"), None);
        assert_eq!(percent_decode("%4"), None);
        assert_eq!(percent_decode("%+1"), None);
    }
}
