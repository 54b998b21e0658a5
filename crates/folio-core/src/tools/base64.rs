//! Base64 encoder / decoder for UTF-8 text.
//!
//! Decoding is lenient in the same ways a browser's `atob` is: padding may
//! be missing and ASCII whitespace anywhere in the input is skipped.

use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use ::base64::engine::DecodePaddingMode;
use ::base64::Engine as _;

use crate::error::{FolioError, FolioResult};

pub const ENCODE_PROMPT: &str = "Please enter some text to encode.";
pub const DECODE_PROMPT: &str = "Please enter Base64 text to decode.";

pub const ENCODED: &str = "Text encoded to Base64 successfully!";
pub const DECODED: &str = "Base64 decoded successfully!";

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode text as standard, padded Base64.
///
/// The input is not trimmed: whitespace is content.
pub fn encode(input: &str) -> FolioResult<String> {
    if input.is_empty() {
        return Err(FolioError::EmptyInput(ENCODE_PROMPT));
    }
    Ok(STANDARD.encode(input.as_bytes()))
}

/// Decode Base64 into UTF-8 text
pub fn decode(input: &str) -> FolioResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FolioError::EmptyInput(DECODE_PROMPT));
    }

    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = LENIENT
        .decode(compact.as_bytes())
        .map_err(|_| FolioError::InvalidBase64)?;
    String::from_utf8(bytes).map_err(|_| FolioError::InvalidBase64)
}
