//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/)

use std::borrow::Cow;

use unicode_normalization::is_nfc;
use unicode_normalization::UnicodeNormalization;

use crate::error::{ConversionError, Errors};
use crate::mapping::{find_char, map_char, Mapping};
use crate::punycode;
use crate::validate::{is_bidi_domain, passes_bidi, validate_decoded, validate_label};

pub(crate) const ACE_PREFIX: &str = "xn--";

/// Matches the ACE prefix case-insensitively and returns the label tail.
///
/// Lookup mapping lowercases ASCII, but registration inputs and decoded
/// labels keep their original case, so `XN--` must be recognized too.
fn strip_ace_prefix(label: &str) -> Option<&str> {
    let bytes = label.as_bytes();
    if bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(ACE_PREFIX.as_bytes()) {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}

/// Registration inputs are taken as the registrant wrote them: no mapping,
/// no normalization. The whole input must already be NFC and every code
/// point must be one that lookup mapping would pass through unchanged.
///
/// <http://www.unicode.org/reports/tr46/#Validity_Criteria>
fn check_registration_input(domain: &str, profile: &Profile, errors: &mut Errors) {
    if !is_nfc(domain) {
        errors.push(ConversionError::not_normalized(domain));
        return;
    }
    for c in domain.chars() {
        if let '.' | '-' | 'a'..='z' | '0'..='9' = c {
            continue;
        }
        let allowed = match *find_char(c) {
            Mapping::Valid | Mapping::Deviation(_) => true,
            Mapping::DisallowedStd3Valid => !profile.use_std3_ascii_rules,
            _ => false,
        };
        if !allowed {
            errors.push(ConversionError::disallowed_character(c));
        }
    }
}

/// <http://www.unicode.org/reports/tr46/#Processing>
pub(crate) fn processing<'a>(domain: &'a str, profile: &Profile) -> (Cow<'a, str>, Errors) {
    // Weed out the simple cases first: domains of lowercase ASCII letters,
    // digits and dots with no hyphens and no ACE prefixes are already in
    // canonical form and can be returned without allocating.
    let (mut prev, mut simple, mut puny_prefix) = ('?', !domain.is_empty(), 0);
    if profile.remove_leading_dots && domain.starts_with('.') {
        simple = false;
    }
    for c in domain.chars() {
        if c == '.' {
            if prev == '-' {
                simple = false;
                break;
            }
            puny_prefix = 0;
            continue;
        } else if puny_prefix == 0 && c == '-' {
            simple = false;
            break;
        } else if puny_prefix < 5 {
            if c == ['x', 'n', '-', '-'][puny_prefix] {
                puny_prefix += 1;
                if puny_prefix == 4 {
                    simple = false;
                    break;
                }
            } else {
                puny_prefix = 5;
            }
        }
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() {
            simple = false;
            break;
        }
        prev = c;
    }
    if simple {
        return (Cow::Borrowed(domain), Errors::default());
    }

    let mut errors = Errors::default();
    let normalized = if profile.validate_for_registration {
        check_registration_input(domain, profile, &mut errors);
        domain.to_owned()
    } else {
        let mut mapped = String::with_capacity(domain.len());
        for c in domain.chars() {
            map_char(c, profile, &mut mapped, &mut errors)
        }
        let mut normalized = String::with_capacity(mapped.len());
        normalized.extend(mapped.nfc());
        normalized
    };
    let source = if profile.remove_leading_dots {
        normalized.trim_start_matches('.')
    } else {
        &normalized[..]
    };

    let mut validated = String::with_capacity(source.len());
    let mut has_bidi_labels = false;
    let mut first = true;
    for label in source.split('.') {
        if !first {
            validated.push('.');
        }
        first = false;
        if label.is_empty() {
            continue;
        }
        if let Some(puny) = strip_ace_prefix(label) {
            match punycode::decode_to_string(puny) {
                Ok(decoded) if !decoded.is_empty() => {
                    if !has_bidi_labels {
                        has_bidi_labels = is_bidi_domain(&decoded);
                    }
                    // Decoded output skips mapping, so it gets the
                    // stricter decoded-label criteria on top.
                    validate_decoded(&decoded, profile, &mut errors);
                    validate_label(&decoded, profile, &mut errors);
                    validated.push_str(&decoded);
                }
                // An empty payload decodes to an empty label, which is
                // never a valid ACE encoding.
                Ok(_) | Err(_) => {
                    errors.push(ConversionError::punycode(label));
                    validated.push_str(label);
                }
            }
        } else {
            if !has_bidi_labels {
                has_bidi_labels = is_bidi_domain(label);
            }
            validate_label(label, profile, &mut errors);
            validated.push_str(label);
        }
    }

    if profile.check_bidi && has_bidi_labels {
        for label in validated.split('.') {
            if !passes_bidi(label, true) {
                errors.push(ConversionError::bidi_rule(source));
                break;
            }
        }
    }
    (Cow::Owned(validated), errors)
}

/// A set of processing options: construct a profile, flip the options
/// that differ, then call [`to_ascii`](Profile::to_ascii) or
/// [`to_unicode`](Profile::to_unicode).
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub(crate) use_std3_ascii_rules: bool,
    pub(crate) transitional_processing: bool,
    pub(crate) verify_dns_length: bool,
    pub(crate) check_hyphens: bool,
    pub(crate) check_joiners: bool,
    pub(crate) check_bidi: bool,
    pub(crate) remove_leading_dots: bool,
    pub(crate) validate_labels: bool,
    pub(crate) validate_for_registration: bool,
}

/// The defaults lean on <https://url.spec.whatwg.org/#idna>: label
/// validation with joiner and bidi checks, everything stricter off.
impl Default for Profile {
    fn default() -> Self {
        Profile {
            use_std3_ascii_rules: false,
            transitional_processing: false,
            verify_dns_length: false,
            check_hyphens: false,
            check_joiners: true,
            check_bidi: true,
            remove_leading_dots: false,
            validate_labels: true,
            validate_for_registration: false,
        }
    }
}

impl Profile {
    /// Transitional lookup: deviation characters are mapped. This is the
    /// strict profile historically used by browser address bars.
    pub const fn resolve() -> Self {
        Profile {
            use_std3_ascii_rules: true,
            transitional_processing: true,
            verify_dns_length: false,
            check_hyphens: true,
            check_joiners: true,
            check_bidi: true,
            remove_leading_dots: false,
            validate_labels: true,
            validate_for_registration: false,
        }
    }

    /// Non-transitional lookup: deviation characters are kept, so
    /// `faß.de` and `fass.de` stay distinct. Suitable for display.
    pub const fn display() -> Self {
        Profile {
            use_std3_ascii_rules: true,
            transitional_processing: false,
            verify_dns_length: false,
            check_hyphens: true,
            check_joiners: true,
            check_bidi: true,
            remove_leading_dots: false,
            validate_labels: true,
            validate_for_registration: false,
        }
    }

    /// Like [`display`](Profile::display), but the input is validated as
    /// written instead of being mapped, and DNS length limits apply.
    pub const fn registration() -> Self {
        Profile {
            use_std3_ascii_rules: true,
            transitional_processing: false,
            verify_dns_length: true,
            check_hyphens: true,
            check_joiners: true,
            check_bidi: true,
            remove_leading_dots: false,
            validate_labels: true,
            validate_for_registration: true,
        }
    }

    /// Bare per-label encoding and decoding with no validation at all.
    pub const fn punycode() -> Self {
        Profile {
            use_std3_ascii_rules: false,
            transitional_processing: false,
            verify_dns_length: false,
            check_hyphens: false,
            check_joiners: false,
            check_bidi: false,
            remove_leading_dots: false,
            validate_labels: false,
            validate_for_registration: false,
        }
    }

    #[inline]
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    #[inline]
    pub fn transitional(mut self, value: bool) -> Self {
        self.transitional_processing = value;
        self
    }

    #[inline]
    pub fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    #[inline]
    pub fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    #[inline]
    pub fn check_joiners(mut self, value: bool) -> Self {
        self.check_joiners = value;
        self
    }

    #[inline]
    pub fn check_bidi(mut self, value: bool) -> Self {
        self.check_bidi = value;
        self
    }

    #[inline]
    pub fn remove_leading_dots(mut self, value: bool) -> Self {
        self.remove_leading_dots = value;
        self
    }

    #[inline]
    pub fn validate_labels(mut self, value: bool) -> Self {
        self.validate_labels = value;
        self
    }

    #[inline]
    pub fn validate_for_registration(mut self, value: bool) -> Self {
        self.validate_for_registration = value;
        self
    }

    /// STD3 ASCII rules and the bidi check as one switch.
    #[inline]
    pub fn strict_domain_name(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self.check_bidi = value;
        self
    }

    /// <http://www.unicode.org/reports/tr46/#ToASCII>
    ///
    /// Conversion is best-effort: the returned name is always the closest
    /// ACE form this profile can produce, and the `Result` reports
    /// everything that was wrong with the input.
    pub fn to_ascii<'a>(&self, domain: &'a str) -> (Cow<'a, str>, Result<(), Errors>) {
        let (mapped, mut errors) = processing(domain, self);
        let result = if mapped.is_ascii() {
            mapped
        } else {
            let mut result = String::with_capacity(mapped.len());
            let mut first = true;
            for label in mapped.split('.') {
                if !first {
                    result.push('.');
                }
                first = false;
                if label.is_ascii() {
                    result.push_str(label);
                } else {
                    match punycode::encode_str(label) {
                        Ok(encoded) => {
                            result.push_str(ACE_PREFIX);
                            result.push_str(&encoded);
                        }
                        Err(_) => {
                            errors.push(ConversionError::punycode(label));
                            result.push_str(label);
                        }
                    }
                }
            }
            Cow::Owned(result)
        };
        if self.verify_dns_length {
            let name = result.strip_suffix('.').unwrap_or(&result);
            if name.is_empty() || name.split('.').any(|label| label.is_empty()) {
                errors.push(ConversionError::dns_length(name));
            }
            if name.len() > 253 || name.split('.').any(|label| label.len() > 63) {
                errors.push(ConversionError::dns_length(name));
            }
        }
        (result, errors.into())
    }

    /// <http://www.unicode.org/reports/tr46/#ToUnicode>
    ///
    /// Never fails to produce output; the `Result` carries whatever
    /// problems processing found.
    pub fn to_unicode<'a>(&self, domain: &'a str) -> (Cow<'a, str>, Result<(), Errors>) {
        let (unicode, errors) = processing(domain, self);
        (unicode, errors.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ace_prefix_stripping() {
        assert_eq!(strip_ace_prefix("xn--tda"), Some("tda"));
        assert_eq!(strip_ace_prefix("XN--tda"), Some("tda"));
        assert_eq!(strip_ace_prefix("xN--tda"), Some("tda"));
        assert_eq!(strip_ace_prefix("xn--"), Some(""));
        assert_eq!(strip_ace_prefix("xn-"), None);
        assert_eq!(strip_ace_prefix("example"), None);
    }

    #[test]
    fn fast_path_borrows() {
        let (output, errors) = processing("www.example.com", &Profile::resolve());
        assert!(matches!(output, Cow::Borrowed(_)));
        assert!(errors.is_empty());
    }

    #[test]
    fn fast_path_bails_on_leading_dot_stripping() {
        let profile = Profile::default().remove_leading_dots(true);
        let (output, errors) = processing("..ab.cd", &profile);
        assert_eq!(output, "ab.cd");
        assert!(errors.is_empty());

        let (output, _) = processing("ab.cd", &profile);
        assert!(matches!(output, Cow::Borrowed(_)));
    }

    #[test]
    fn hyphens_and_uppercase_leave_the_fast_path() {
        for domain in ["a-b.com", "Ab.com", "xn--tda", "caf\u{E9}.fr"] {
            let (output, _) = processing(domain, &Profile::default());
            assert!(
                matches!(output, Cow::Owned(_)),
                "{:?} should take the full pipeline",
                domain
            );
        }
    }
}
