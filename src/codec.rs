use crate::compat::{Cow, String, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{split_pair, strip_question_mark};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

// application/x-www-form-urlencoded, as used by URLSearchParams
// Based on https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set

/// Form percent-encode set
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`.
/// Space is part of the set and is rewritten to `+` on output.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Write a form-encoded component directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    // Each byte in the set comes out as its own "%XX" chunk
    for chunk in utf8_percent_encode(input, FORM_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Serialize pairs as `name=value` joined by `&`, without a leading `?`.
pub fn serialize_pairs_into<'a, I>(buffer: &mut String, pairs: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            buffer.push('&');
        }
        encode_component_into(buffer, key);
        buffer.push('=');
        encode_component_into(buffer, value);
    }
}

/// Replace `+` with space ahead of percent-decoding (zero-copy if none)
fn plus_to_space(input: &str) -> Cow<'_, [u8]> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'+', bytes).is_none() {
        return Cow::Borrowed(bytes);
    }
    Cow::Owned(
        bytes
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect(),
    )
}

/// Decode a component leniently.
/// Malformed escapes pass through literally and invalid UTF-8 becomes U+FFFD.
pub fn decode_component(input: &str) -> String {
    let bytes = plus_to_space(input);
    percent_decode(&bytes).decode_utf8_lossy().into_owned()
}

/// Decode a component, rejecting malformed escapes and invalid UTF-8.
pub fn decode_component_strict(input: &str) -> Result<String> {
    let bytes = plus_to_space(input);
    check_escapes(&bytes)?;
    percent_decode(&bytes)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidUtf8)
}

fn check_escapes(bytes: &[u8]) -> Result<()> {
    for pos in memchr::memchr_iter(b'%', bytes) {
        match bytes.get(pos + 1..pos + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {}
            _ => return Err(ParseError::InvalidPercentEncoding),
        }
    }
    Ok(())
}

/// Raw (still encoded) pairs of a query string, with or without leading `?`.
/// Empty pairs between consecutive `&` are skipped.
fn raw_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    strip_question_mark(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(split_pair)
}

/// Parse a query string into decoded pairs
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    raw_pairs(query)
        .map(|(key, value)| (decode_component(key), decode_component(value)))
        .collect()
}

/// Parse a query string into decoded pairs, failing on the first bad component
pub fn try_parse_query(query: &str) -> Result<Vec<(String, String)>> {
    raw_pairs(query)
        .map(|(key, value)| -> Result<(String, String)> {
            Ok((decode_component_strict(key)?, decode_component_strict(value)?))
        })
        .collect()
}
