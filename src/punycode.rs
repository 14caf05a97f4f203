//! Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)) implementation.
//!
//! Since Punycode fundamentally works on unicode code points,
//! `encode` and `decode` take and return slices and vectors of `char`.
//! `encode_str` and `decode_to_string` provide convenience wrappers
//! that convert from and to Rust's UTF-8 based `str` and `String` types.
//!
//! This module converts bare labels. It knows nothing about the `xn--`
//! prefix or the rest of UTS #46; that lives in [`crate::Profile`].

use smallvec::SmallVec;
use thiserror::Error;

static BASE: u32 = 36;
static T_MIN: u32 = 1;
static T_MAX: u32 = 26;
static SKEW: u32 = 38;
static DAMP: u32 = 700;
static INITIAL_BIAS: u32 = 72;
static INITIAL_N: u32 = 0x80;
static DELIMITER: char = '-';

/// Reasons a bootstring conversion can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunycodeError {
    /// A code point before the last delimiter is outside ASCII.
    #[error("non-ASCII code point in the basic portion")]
    NonAsciiBasic,
    /// A byte after the last delimiter is not a base-36 digit.
    #[error("invalid base-36 digit")]
    InvalidDigit,
    /// The input ends in the middle of a delta.
    #[error("truncated variable-length integer")]
    Truncated,
    /// A delta does not fit in 32 bits (RFC 3492 section 6.4).
    #[error("numeric overflow")]
    Overflow,
    /// A delta produced a value that is not a Unicode scalar.
    #[error("invalid code point")]
    InvalidCodePoint,
}

#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

/// Convert Punycode to an Unicode `String`.
///
/// This is a convenience wrapper around `decode`.
#[inline]
pub fn decode_to_string(input: &str) -> Result<String, PunycodeError> {
    decode_inner(input).map(|chars| chars.into_iter().collect())
}

/// Convert Punycode to Unicode.
///
/// Overflow can only happen on inputs that take more than
/// 63 encoded bytes, the DNS limit on domain name labels.
pub fn decode(input: &str) -> Result<Vec<char>, PunycodeError> {
    decode_inner(input).map(SmallVec::into_vec)
}

fn decode_inner(input: &str) -> Result<SmallVec<[char; 64]>, PunycodeError> {
    let (mut output, input): (SmallVec<[char; 64]>, &str) = match input.rfind(DELIMITER) {
        None => (SmallVec::new(), input),
        Some(position) => (
            input[..position].chars().collect(),
            if position > 0 {
                &input[position + 1..]
            } else {
                input
            },
        ),
    };
    if output.iter().any(|c| !c.is_ascii()) {
        return Err(PunycodeError::NonAsciiBasic);
    }
    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i = 0;
    let mut iter = input.bytes();
    loop {
        let previous_i = i;
        let mut weight = 1;
        let mut k = BASE;
        let mut byte = match iter.next() {
            None => break,
            Some(byte) => byte,
        };
        loop {
            let digit = match byte {
                byte @ b'0'..=b'9' => byte - b'0' + 26,
                byte @ b'A'..=b'Z' => byte - b'A',
                byte @ b'a'..=b'z' => byte - b'a',
                _ => return Err(PunycodeError::InvalidDigit),
            } as u32;
            if digit > (u32::MAX - i) / weight {
                return Err(PunycodeError::Overflow);
            }
            i += digit * weight;
            let t = if k <= bias {
                T_MIN
            } else if k >= bias + T_MAX {
                T_MAX
            } else {
                k - bias
            };
            if digit < t {
                break;
            }
            if weight > u32::MAX / (BASE - t) {
                return Err(PunycodeError::Overflow);
            }
            weight *= BASE - t;
            k += BASE;
            byte = match iter.next() {
                None => return Err(PunycodeError::Truncated),
                Some(byte) => byte,
            };
        }
        let length = output.len() as u32;
        bias = adapt(i - previous_i, length + 1, previous_i == 0);
        if i / (length + 1) > u32::MAX - code_point {
            return Err(PunycodeError::Overflow);
        }
        code_point += i / (length + 1);
        i %= length + 1;
        let c = char::from_u32(code_point).ok_or(PunycodeError::InvalidCodePoint)?;
        output.insert(i as usize, c);
        i += 1;
    }
    Ok(output)
}

/// Convert an Unicode `str` to Punycode.
///
/// This is a convenience wrapper around `encode`.
#[inline]
pub fn encode_str(input: &str) -> Result<String, PunycodeError> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.chars(), &mut buf).map(|()| buf)
}

/// Convert Unicode to Punycode.
///
/// Overflow can only happen on inputs that would take more than
/// 63 encoded bytes, the DNS limit on domain name labels.
pub fn encode(input: &[char]) -> Result<String, PunycodeError> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.iter().copied(), &mut buf).map(|()| buf)
}

fn encode_into<I>(input: I, output: &mut String) -> Result<(), PunycodeError>
where
    I: Iterator<Item = char> + Clone,
{
    let (mut input_length, mut basic_length) = (0u32, 0u32);
    for c in input.clone() {
        input_length += 1;
        if c.is_ascii() {
            output.push(c);
            basic_length += 1;
        }
    }
    if basic_length > 0 {
        output.push_str("-")
    }
    let mut code_point = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;
    while processed < input_length {
        let min_code_point = input
            .clone()
            .map(|c| c as u32)
            .filter(|&c| c >= code_point)
            .min()
            .unwrap();
        if min_code_point - code_point > (u32::MAX - delta) / (processed + 1) {
            return Err(PunycodeError::Overflow);
        }
        delta += (min_code_point - code_point) * (processed + 1);
        code_point = min_code_point;
        for c in input.clone() {
            let c = c as u32;
            if c < code_point {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if c == code_point {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = if k <= bias {
                        T_MIN
                    } else if k >= bias + T_MAX {
                        T_MAX
                    } else {
                        k - bias
                    };
                    if q < t {
                        break;
                    }
                    let value = t + ((q - t) % (BASE - t));
                    output.push(value_to_digit(value));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(value_to_digit(q));
                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }
        delta += 1;
        code_point += 1;
    }
    Ok(())
}

#[inline]
fn value_to_digit(value: u32) -> char {
    match value {
        0..=25 => (value as u8 + b'a') as char,
        26..=35 => (value as u8 - 26 + b'0') as char,
        _ => panic!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapt_reference_values() {
        assert_eq!(adapt(0, 1, true), 0);
        // First-time damping divides by 700 and floors small deltas to zero.
        assert_eq!(adapt(100, 10, true), 0);
        assert_eq!(adapt(1000, 1, true), 1);
        // 36 * 120 / (120 + 38)
        assert_eq!(adapt(200, 5, false), 27);
        // Past the threshold the loop adds BASE per round of division.
        assert_eq!(adapt(2000, 1, false), 57);
    }

    #[test]
    fn delimiter_handling() {
        assert_eq!(decode_to_string("abc-").as_deref(), Ok("abc"));
        assert_eq!(decode_to_string("").as_deref(), Ok(""));
        assert_eq!(decode_to_string("-"), Err(PunycodeError::InvalidDigit));
        assert_eq!(
            decode_to_string("\u{FC}-"),
            Err(PunycodeError::NonAsciiBasic)
        );
    }

    #[test]
    fn round_trip() {
        assert_eq!(encode_str("b\u{FC}cher").as_deref(), Ok("bcher-kva"));
        assert_eq!(decode_to_string("bcher-kva").as_deref(), Ok("b\u{FC}cher"));
        assert_eq!(
            decode("tda").as_deref(),
            Ok(&['\u{FC}'][..]),
            "single extended code point"
        );
    }

    #[test]
    fn truncated_input() {
        assert_eq!(decode_to_string("mnchen-3y"), Err(PunycodeError::Truncated));
    }
}
