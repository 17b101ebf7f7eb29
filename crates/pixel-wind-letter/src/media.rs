//! Optional media reference attached to a letter.

use std::fmt;

use crate::error::LetterError;

/// Length of a video id on the supported platform.
const ID_LEN: usize = 11;

/// A validated video id.
///
/// The codec carries media ids as opaque text; this type is what the
/// creator flow uses to check user input before sealing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    /// Accept a bare id or a watch, short-link, embed or shorts URL.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let input = input.trim();
        let candidate = extract_id(input).unwrap_or(input);
        if is_valid_id(candidate) {
            Ok(MediaRef(candidate.to_string()))
        } else {
            Err(LetterError::InvalidMediaRef(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn extract_id(url: &str) -> Option<&str> {
    if !url.contains("youtu") {
        return None;
    }
    if let Some((_, query)) = url.split_once('?') {
        let query = query.split('#').next().unwrap_or_default();
        if let Some(id) = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find_map(|(key, value)| (key == "v").then_some(value))
        {
            return Some(id);
        }
    }
    ["youtu.be/", "/embed/", "/shorts/"]
        .iter()
        .find_map(|marker| url.split_once(marker).map(|(_, rest)| rest))
        .map(|rest| rest.split(['?', '#', '/', '&']).next().unwrap_or_default())
}

fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
