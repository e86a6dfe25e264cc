//! URL transport for the card message.
//!
//! The message travels in the `text` query parameter as standard base64 of
//! its UTF-8 bytes. The core only decodes it once; the card treats the result
//! as an opaque string for its whole lifetime.

use crate::constants::DEFAULT_MESSAGE;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Decoder accepting links with or without `=` padding, as browsers' `atob`
/// does.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("message is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("message is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn encode_message(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a query value produced by [`encode_message`].
///
/// Form decoding turns an unescaped `+` into a space, so spaces are read back
/// as `+`; other surrounding whitespace is ignored. Padding is optional.
pub fn decode_message(encoded: &str) -> Result<String, MessageError> {
    let normalized = encoded
        .trim_matches(|c: char| c.is_whitespace() && c != ' ')
        .replace(' ', "+");
    let bytes = LENIENT.decode(normalized.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Resolve the message for a query value: the default greeting when the
/// parameter is absent or blank, an empty string when it cannot be decoded.
pub fn message_from_query(param: Option<&str>) -> String {
    match param.filter(|p| !p.trim().is_empty()) {
        None => DEFAULT_MESSAGE.to_string(),
        Some(encoded) => decode_message(encoded).unwrap_or_else(|e| {
            log::warn!("[message] {}", e);
            String::new()
        }),
    }
}
