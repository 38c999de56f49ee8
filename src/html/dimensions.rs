//! Image size hints.
//!
//! Images may carry a `WIDTHxHEIGHT` hint (for example `640x480`, or just
//! `640`). The hint is best-effort: anything malformed is dropped without an
//! error and the image renders without size attributes.

/// Longest hint, in bytes, that is considered at all.
pub const MAX_DIMENSION_HINT: usize = 30;

/// A parsed image size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: Option<u32>,
}

/// Parse a `WIDTH` or `WIDTHxHEIGHT` hint.
///
/// Surrounding ASCII whitespace is ignored. Returns `None` for empty or
/// over-long hints, signs, missing numbers, trailing bytes and values that
/// do not fit in a `u32`.
///
/// # Examples
///
/// ```
/// use quire::html::{Dimensions, parse_dimensions};
///
/// assert_eq!(
///     parse_dimensions(b"100x50"),
///     Some(Dimensions { width: 100, height: Some(50) })
/// );
/// assert_eq!(
///     parse_dimensions(b"100"),
///     Some(Dimensions { width: 100, height: None })
/// );
/// assert_eq!(parse_dimensions(b"100x"), None);
/// assert_eq!(parse_dimensions(b"wide"), None);
/// ```
pub fn parse_dimensions(hint: &[u8]) -> Option<Dimensions> {
    if hint.is_empty() || hint.len() > MAX_DIMENSION_HINT {
        return None;
    }

    let hint = hint.trim_ascii();
    let (width, rest) = parse_number(hint)?;

    match rest {
        [] => Some(Dimensions {
            width,
            height: None,
        }),
        [b'x', rest @ ..] => {
            let (height, rest) = parse_number(rest)?;
            rest.is_empty().then_some(Dimensions {
                width,
                height: Some(height),
            })
        }
        _ => None,
    }
}

/// Parse a run of ASCII digits at the start of `input`.
fn parse_number(input: &[u8]) -> Option<(u32, &[u8])> {
    let digits = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let mut value: u32 = 0;
    for &b in &input[..digits] {
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some((value, &input[digits..]))
}
