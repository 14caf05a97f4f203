//! Label validity criteria: hyphen restrictions, combining marks, joiner
//! context (RFC 5892 appendix A) and the Bidi rule (RFC 5893).
//!
//! <http://www.unicode.org/reports/tr46/#Validity_Criteria>

use std::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_normalization::char::{canonical_combining_class, is_combining_mark};
use unicode_normalization::is_nfc;

use self::JoiningType::*;
use crate::error::{ConversionError, Errors};
use crate::mapping::{find_char, Mapping};
use crate::uts46::Profile;

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';
const VIRAMA: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoiningType {
    C,
    D,
    L,
    R,
    T,
}

include!("joining_types_table.rs");

fn joining_type(codepoint: char) -> Option<JoiningType> {
    JOINING_TABLE
        .binary_search_by(|&(from, to, _)| {
            if codepoint > to {
                Less
            } else if codepoint < from {
                Greater
            } else {
                Equal
            }
        })
        .ok()
        .map(|i| JOINING_TABLE[i].2)
}

/// RFC 5892 appendix A.1.
///
/// ZWNJ is allowed after a virama, or when it breaks a cursive connection:
/// a left- or dual-joining character before it and a right- or dual-joining
/// character after it, with transparent characters skipped on both sides.
fn zwnj_allowed(chars: &[char], idx: usize) -> bool {
    if idx > 0 && canonical_combining_class(chars[idx - 1]) == VIRAMA {
        return true;
    }
    let mut j = idx;
    loop {
        if j == 0 {
            return false;
        }
        j -= 1;
        match joining_type(chars[j]) {
            Some(T) => {}
            Some(L) | Some(D) => break,
            _ => return false,
        }
    }
    let mut j = idx + 1;
    loop {
        if j == chars.len() {
            return false;
        }
        match joining_type(chars[j]) {
            Some(T) => j += 1,
            Some(R) | Some(D) => return true,
            _ => return false,
        }
    }
}

/// Checks that apply to every label of the mapped domain, decoded or not.
pub(crate) fn validate_label(label: &str, profile: &Profile, errors: &mut Errors) {
    if !profile.validate_labels || label.is_empty() {
        return;
    }
    if profile.check_hyphens {
        let bytes = label.as_bytes();
        if bytes.len() > 4 && &bytes[2..4] == b"--" {
            errors.push(ConversionError::hyphen_positions(label));
        }
        if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
            errors.push(ConversionError::leading_trailing_hyphen(label));
        }
    }
    if label.chars().next().map_or(false, is_combining_mark) {
        errors.push(ConversionError::leading_combining_mark(label));
    }
    if profile.check_joiners && label.chars().any(|c| c == ZWNJ || c == ZWJ) {
        let chars: SmallVec<[char; 64]> = label.chars().collect();
        for (idx, &c) in chars.iter().enumerate() {
            let allowed = match c {
                ZWNJ => zwnj_allowed(&chars, idx),
                ZWJ => idx > 0 && canonical_combining_class(chars[idx - 1]) == VIRAMA,
                _ => continue,
            };
            if !allowed {
                errors.push(ConversionError::joiner_context(label));
                break;
            }
        }
    }
}

/// Checks that apply only to labels obtained by Punycode decoding.
///
/// Mapping and normalization never run on decoded output, so a decoded
/// label must already be NFC and contain only code points that survive
/// the mapping step unchanged.
pub(crate) fn validate_decoded(label: &str, profile: &Profile, errors: &mut Errors) {
    if !profile.validate_labels {
        return;
    }
    if !is_nfc(label) {
        errors.push(ConversionError::not_normalized(label));
    }
    for c in label.chars() {
        let allowed = match *find_char(c) {
            Mapping::Valid | Mapping::Deviation(_) => true,
            Mapping::DisallowedStd3Valid => !profile.use_std3_ascii_rules,
            _ => false,
        };
        if !allowed {
            errors.push(ConversionError::invalid_decoded_character(label));
            break;
        }
    }
}

/// RFC 5893 rules 1 through 6, applied when the domain is a bidi domain.
pub(crate) fn passes_bidi(label: &str, is_bidi_domain: bool) -> bool {
    if !is_bidi_domain {
        return true;
    }
    let mut chars = label.chars();
    let first_char_class = match chars.next() {
        Some(c) => bidi_class(c),
        None => return true,
    };
    match first_char_class {
        BidiClass::L => {
            for c in chars {
                if !matches!(
                    bidi_class(c),
                    BidiClass::L
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                ) {
                    return false;
                }
            }
            let mut rev_chars = label.chars().rev();
            let mut last_non_nsm = rev_chars.next();
            loop {
                match last_non_nsm {
                    Some(c) if bidi_class(c) == BidiClass::NSM => {
                        last_non_nsm = rev_chars.next();
                        continue;
                    }
                    _ => break,
                }
            }
            match last_non_nsm {
                Some(c) if bidi_class(c) == BidiClass::L || bidi_class(c) == BidiClass::EN => {}
                Some(_) => return false,
                _ => {}
            }
        }
        BidiClass::R | BidiClass::AL => {
            let mut found_en = false;
            let mut found_an = false;
            for c in chars {
                let char_class = bidi_class(c);
                if char_class == BidiClass::EN {
                    found_en = true;
                } else if char_class == BidiClass::AN {
                    found_an = true;
                }
                if !matches!(
                    char_class,
                    BidiClass::R
                        | BidiClass::AL
                        | BidiClass::AN
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                ) {
                    return false;
                }
            }
            let mut rev_chars = label.chars().rev();
            let mut last = rev_chars.next();
            loop {
                match last {
                    Some(c) if bidi_class(c) == BidiClass::NSM => {
                        last = rev_chars.next();
                        continue;
                    }
                    _ => break,
                }
            }
            match last {
                Some(c)
                    if matches!(
                        bidi_class(c),
                        BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN
                    ) => {}
                _ => return false,
            }
            if found_an && found_en {
                return false;
            }
        }
        _ => return false,
    }
    true
}

/// A bidi domain is one where some label contains an RTL character.
/// ASCII printable characters are skipped without a class lookup.
pub(crate) fn is_bidi_domain(s: &str) -> bool {
    for c in s.chars() {
        if c.is_ascii_graphic() {
            continue;
        }
        match bidi_class(c) {
            BidiClass::R | BidiClass::AL | BidiClass::AN => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joining_type_lookup() {
        assert_eq!(joining_type('\u{628}'), Some(D));
        assert_eq!(joining_type('\u{627}'), Some(R));
        assert_eq!(joining_type('\u{640}'), Some(C));
        assert_eq!(joining_type('\u{70F}'), Some(T));
        assert_eq!(joining_type('a'), None);
    }

    #[test]
    fn zwnj_context() {
        let after_virama: Vec<char> = "\u{915}\u{94D}\u{200C}\u{937}".chars().collect();
        assert!(zwnj_allowed(&after_virama, 2));

        let cursive_break: Vec<char> = "\u{62F}\u{64A}\u{200C}\u{62C}\u{64A}".chars().collect();
        assert!(zwnj_allowed(&cursive_break, 2));

        let latin: Vec<char> = "a\u{200C}b".chars().collect();
        assert!(!zwnj_allowed(&latin, 1));
        let at_start: Vec<char> = "\u{200C}b".chars().collect();
        assert!(!zwnj_allowed(&at_start, 0));
    }

    #[test]
    fn bidi_rules() {
        assert!(passes_bidi("abc", false), "rules off for LTR-only domains");
        assert!(passes_bidi("abc", true));
        assert!(passes_bidi("\u{5D0}\u{5D1}", true));
        assert!(!passes_bidi("0a", true), "EN cannot start a label");
        assert!(!passes_bidi("\u{5D0}a", true), "L after R");
        assert!(
            !passes_bidi("\u{5D0}\u{661}x", true),
            "LTR tail in RTL label"
        );
        assert!(!passes_bidi("\u{660}", true), "AN cannot start a label");
        assert!(passes_bidi("", true));
    }

    #[test]
    fn bidi_domain_detection() {
        assert!(!is_bidi_domain("www.example.com"));
        assert!(is_bidi_domain("\u{5D0}.example"));
        assert!(is_bidi_domain("\u{660}"));
        assert!(!is_bidi_domain("b\u{FC}cher.de"));
    }
}
