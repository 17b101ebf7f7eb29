//! Payload <-> transport token conversion.
//!
//! The payload is written as a small JSON record, its UTF-8 bytes are
//! base64-encoded with the URL-safe alphabet and no padding. That alphabet
//! (`A-Z a-z 0-9 - _`) contains nothing a query string reserves, so the
//! token goes into a link as is.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::json;

use crate::error::{DecodeError, Invalid};
use crate::payload::LetterPayload;

/// Record shape on the wire. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    to: String,
    from: String,
    msg1: String,
    #[serde(default)]
    msg2: Option<String>,
    #[serde(default)]
    media_id: Option<String>,
    seed: f64,
}

/// Encode a payload into a link-safe token.
pub fn encode(payload: &LetterPayload) -> String {
    let mut record = json!({
        "to": payload.to(),
        "from": payload.from(),
        "msg1": payload.msg1(),
        "seed": payload.seed(),
    });
    if let Some(msg2) = payload.msg2() {
        record["msg2"] = json!(msg2);
    }
    if let Some(media_id) = payload.media_id() {
        record["mediaId"] = json!(media_id);
    }
    URL_SAFE_NO_PAD.encode(record.to_string())
}

/// Decode a token back into a payload.
///
/// Standard base64 (`+`, `/`, `=` padding) is accepted as well. Every
/// failure, whether in the transport text or in the record, is reported
/// as [`Invalid`].
pub fn decode(token: &str) -> Result<LetterPayload, Invalid> {
    decode_record(token).map_err(|err| {
        tracing::debug!(error = %err, "rejected letter token");
        Invalid::from(err)
    })
}

fn decode_record(token: &str) -> Result<LetterPayload, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(normalize(token))?;
    let text = String::from_utf8(bytes)?;
    let record: Record = serde_json::from_str(&text)?;
    let payload = LetterPayload::new(
        &record.to,
        &record.from,
        &record.msg1,
        record.msg2.as_deref(),
        record.media_id.as_deref(),
        record.seed,
    )?;
    Ok(payload)
}

/// Map the standard alphabet onto the URL-safe one and drop padding.
fn normalize(token: &str) -> String {
    token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use proptest::prelude::*;

    use super::*;

    fn letter(msg1: &str, msg2: Option<&str>) -> LetterPayload {
        LetterPayload::new("Ana", "Bo", msg1, msg2, None, 0.123456).unwrap()
    }

    #[test]
    fn test_round_trip_reserved_and_multibyte() {
        let payload = LetterPayload::new(
            "Ana & Co",
            "Bo=Bo?",
            "a=1&b=2?c#d%20 — 안녕 🌹🌬️",
            Some("second page: 100% yes & more 💌"),
            Some("dQw4w9WgXcQ"),
            0.987_654_321_012_345_6,
        )
        .unwrap();
        let token = encode(&payload);
        assert_eq!(decode(&token), Ok(payload));
    }

    #[test]
    fn test_token_is_link_safe() {
        let token = encode(&letter("?&=#%+/ ünïcödé", Some("🌹")));
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unexpected character in {token}"
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let token = encode(&letter("hi", None));
        let text = String::from_utf8(URL_SAFE_NO_PAD.decode(token).unwrap()).unwrap();
        assert!(!text.contains("msg2"));
        assert!(!text.contains("mediaId"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode("%%%not-a-token%%%").is_err());
        assert!(decode("").is_err());
        assert!(decode("a").is_err());
        assert!(matches!(
            decode("%%%not-a-token%%%").unwrap_err().cause(),
            DecodeError::MalformedToken(_)
        ));
    }

    #[test]
    fn test_rejects_truncated_token() {
        let token = encode(&letter("a longer message to cut short", None));
        for cut in 1..8 {
            assert!(decode(&token[..token.len() - cut]).is_err());
        }
    }

    #[test]
    fn test_rejects_incomplete_record() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"to":"Ana","msg1":"hi","seed":0.5}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err.cause(), DecodeError::MalformedPayload(_)));

        let token = URL_SAFE_NO_PAD.encode(r#"{"to":"  ","from":"Bo","msg1":"hi","seed":0.5}"#);
        assert!(decode(&token).is_err());

        let token = URL_SAFE_NO_PAD.encode(r#"["Ana","Bo","hi",0.5]"#);
        assert!(decode(&token).is_err());

        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0x00]);
        assert!(matches!(
            decode(&token).unwrap_err().cause(),
            DecodeError::MalformedToken(_)
        ));
    }

    #[test]
    fn test_accepts_standard_alphabet_with_empty_msg2() {
        let json = r#"{"to":"Ana","from":"Bo","msg1":"¿sí?","msg2":"","seed":0.5}"#;
        let token = STANDARD.encode(json);
        let payload = decode(&token).unwrap();
        assert_eq!(payload.msg1(), "¿sí?");
        assert_eq!(payload.msg2(), None);
        assert_eq!(payload.seed(), 0.5);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            to in "\\PC{1,24}",
            from in "\\PC{1,24}",
            msg1 in "\\PC{1,120}",
            msg2 in proptest::option::of("\\PC{0,120}"),
            media in proptest::option::of("[A-Za-z0-9_-]{11}"),
            seed in 0.0..1.0f64,
        ) {
            let payload = LetterPayload::new(&to, &from, &msg1, msg2.as_deref(), media.as_deref(), seed);
            prop_assume!(payload.is_ok());
            let payload = payload.unwrap();
            prop_assert_eq!(decode(&encode(&payload)), Ok(payload));
        }
    }
}
