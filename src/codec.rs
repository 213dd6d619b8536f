//! Base64Url encoding without padding (RFC 4648 §5).
//!
//! Encoding goes through the standard padded alphabet and rewrites the result:
//! `+` becomes `-`, `/` becomes `_`, trailing `=` is dropped. Decoding reverses
//! the rewrite and restores the padding from the length before handing the text
//! to the standard decoder.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, DecodeSliceError, Engine as _};
use tracing::{debug, trace};

use crate::error::CodecError;

const PADDING: char = '=';

/// Padded inputs up to this length are trial-decoded in a stack buffer.
const STACK_SCRATCH_LEN: usize = 512;

/// Standard alphabet with `=` padding. Unused low bits in the last symbol are
/// ignored on decode, so `"validx"` is accepted.
const STANDARD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Outcome of [`validate`]: whether the text is Base64Url and how many bytes it
/// decodes to. `bytes_written` is always 0 when `is_valid` is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub bytes_written: usize,
}

impl Validation {
    const INVALID: Validation = Validation {
        is_valid: false,
        bytes_written: 0,
    };

    fn valid(bytes_written: usize) -> Self {
        Validation {
            is_valid: true,
            bytes_written,
        }
    }

    /// The decoded length, if the text was valid.
    pub fn decoded_len(&self) -> Option<usize> {
        self.is_valid.then_some(self.bytes_written)
    }
}

/// Encode bytes as Base64Url without padding.
///
/// Returns [`CodecError::EmptyData`] for an empty slice; "no data" is never
/// encoded as an empty string.
pub fn encode(data: &[u8]) -> Result<String, CodecError> {
    if data.is_empty() {
        debug!("refusing to encode empty data");
        return Err(CodecError::EmptyData);
    }

    let base64 = STANDARD_ENGINE.encode(data);
    Ok(base64
        .trim_end_matches(PADDING)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect())
}

/// Decode a Base64Url string back to bytes.
///
/// Fails with [`CodecError::InvalidBase64Url`] exactly when [`validate`]
/// reports the text as invalid.
pub fn decode(encoded_data: &str) -> Result<Vec<u8>, CodecError> {
    if !validate(encoded_data).is_valid {
        debug!(len = encoded_data.len(), "rejecting invalid Base64Url input");
        return Err(CodecError::InvalidBase64Url);
    }

    STANDARD_ENGINE
        .decode(to_base64(encoded_data))
        .map_err(|e| {
            debug!(error = %e, "validated Base64Url input failed to decode");
            CodecError::InvalidBase64Url
        })
}

/// Check whether `data` is a Base64Url string, without allocating a result.
///
/// Never fails: empty text, characters outside `A-Z a-z 0-9 - _` (including
/// any `=`), and lengths that cannot be re-padded all yield an invalid
/// [`Validation`].
pub fn validate(data: &str) -> Validation {
    if data.is_empty() {
        trace!("empty input is not Base64Url");
        return Validation::INVALID;
    }

    if let Some(position) = data.bytes().position(|b| !is_base64url_byte(b)) {
        trace!(position, "character outside the Base64Url alphabet");
        return Validation::INVALID;
    }

    let base64 = to_base64(data);
    match trial_decode(&base64) {
        Ok(written) => Validation::valid(written),
        Err(e) => {
            trace!(error = %e, "re-padded input is not valid Base64");
            Validation::INVALID
        }
    }
}

fn is_base64url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Undo the URL-safe substitutions and restore `=` padding to a multiple of 4.
fn to_base64(base64_url: &str) -> String {
    let padding = (4 - base64_url.len() % 4) % 4;
    let mut base64 = String::with_capacity(base64_url.len() + padding);
    base64.extend(base64_url.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        c => c,
    }));
    base64.extend(std::iter::repeat(PADDING).take(padding));
    base64
}

/// Decode into a throwaway buffer as long as the padded text, which always
/// exceeds the decoded length.
fn trial_decode(base64: &str) -> Result<usize, DecodeSliceError> {
    if base64.len() <= STACK_SCRATCH_LEN {
        let mut scratch = [0u8; STACK_SCRATCH_LEN];
        STANDARD_ENGINE.decode_slice(base64, &mut scratch[..base64.len()])
    } else {
        let mut scratch = vec![0u8; base64.len()];
        STANDARD_ENGINE.decode_slice(base64, &mut scratch)
    }
}
