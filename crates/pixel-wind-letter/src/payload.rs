//! The letter a creator seals into a link.

use crate::error::LetterError;

/// Names, messages, optional media and the scene seed.
///
/// Construction trims every text field and enforces the required ones, so a
/// payload that exists is always valid and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterPayload {
    to: String,
    from: String,
    msg1: String,
    msg2: Option<String>,
    media_id: Option<String>,
    seed: f64,
}

impl LetterPayload {
    /// Validate creator input.
    ///
    /// `to`, `from` and `msg1` must be non-empty after trimming. An empty
    /// `msg2` or `media_id` counts as absent. The media reference is kept
    /// as given; see [`MediaRef`](crate::MediaRef) for validating it first.
    pub fn new(
        to: &str,
        from: &str,
        msg1: &str,
        msg2: Option<&str>,
        media_id: Option<&str>,
        seed: f64,
    ) -> Result<Self, LetterError> {
        if !(0.0..1.0).contains(&seed) {
            return Err(LetterError::SeedOutOfRange(seed));
        }
        Ok(Self {
            to: required("to", to)?,
            from: required("from", from)?,
            msg1: required("msg1", msg1)?,
            msg2: optional(msg2),
            media_id: optional(media_id),
            seed,
        })
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    /// First page of the letter.
    pub fn msg1(&self) -> &str {
        &self.msg1
    }

    /// Optional second page.
    pub fn msg2(&self) -> Option<&str> {
        self.msg2.as_deref()
    }

    /// Opaque external media reference.
    pub fn media_id(&self) -> Option<&str> {
        self.media_id.as_deref()
    }

    /// Seed for the reader's scene, in `[0, 1)`.
    pub fn seed(&self) -> f64 {
        self.seed
    }
}

fn required(name: &'static str, value: &str) -> Result<String, LetterError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LetterError::MissingField(name));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_fields() {
        let letter =
            LetterPayload::new("  Ana ", "\tBo", " hello\n", Some("  "), Some(" abc "), 0.25)
                .unwrap();
        assert_eq!(letter.to(), "Ana");
        assert_eq!(letter.from(), "Bo");
        assert_eq!(letter.msg1(), "hello");
        assert_eq!(letter.msg2(), None);
        assert_eq!(letter.media_id(), Some("abc"));
        assert_eq!(letter.seed(), 0.25);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            LetterPayload::new(" ", "b", "c", None, None, 0.1),
            Err(LetterError::MissingField("to"))
        );
        assert_eq!(
            LetterPayload::new("a", "", "c", None, None, 0.1),
            Err(LetterError::MissingField("from"))
        );
        assert_eq!(
            LetterPayload::new("a", "b", "\n", None, None, 0.1),
            Err(LetterError::MissingField("msg1"))
        );
    }

    #[test]
    fn test_seed_range() {
        assert!(LetterPayload::new("a", "b", "c", None, None, 0.0).is_ok());
        assert!(LetterPayload::new("a", "b", "c", None, None, 1.0).is_err());
        assert!(LetterPayload::new("a", "b", "c", None, None, -0.1).is_err());
        assert!(LetterPayload::new("a", "b", "c", None, None, f64::NAN).is_err());
    }
}
