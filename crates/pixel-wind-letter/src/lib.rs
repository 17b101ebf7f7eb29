//! Sealed letters for pixel-wind links.
//!
//! A [`LetterPayload`] holds what the creator typed plus the scene seed.
//! [`encode`] turns it into a token that can sit in a link's query string
//! without escaping, and [`decode`] turns a token back into a payload or
//! reports it as [`Invalid`]. The [`reveal`] module sequences how a reader
//! sees the letter once it has been opened.

mod codec;
mod error;
mod link;
mod media;
mod payload;
pub mod reveal;

pub use codec::{decode, encode};
pub use error::{DecodeError, Invalid, LetterError};
pub use link::{LETTER_QUERY_KEY, letter_from_link, seal_link, token_from_link};
pub use media::MediaRef;
pub use payload::LetterPayload;
