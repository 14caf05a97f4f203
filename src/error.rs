//! Error types reported by the conversion pipeline.
//!
//! Every rule violation is a [`ConversionError`] carrying the offending
//! fragment. A whole conversion accumulates them into [`Errors`], which keeps
//! the order in which the pipeline found them and never stores the same
//! violation twice.

use std::fmt;
use thiserror::Error;

/// A single violation detected while converting a domain name.
///
/// Each variant corresponds to one rule of UTS #46 or RFC 5890-5893 and is
/// identified by a stable short code (see [`ConversionError::code`]): `P1`
/// for the mapping step, `V1`-`V6` for label validity, `A3`/`A4` for the
/// ASCII conversion, `B` for the bidi rule and `C` for the joiner contexts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A character the mapping table disallows.
    #[error("disallowed character {character:?}")]
    DisallowedCharacter {
        /// The disallowed code point.
        character: char,
    },

    /// Input that must already be in Unicode Normalization Form C but is not.
    #[error("not in Unicode Normalization Form C: {label:?}")]
    NotNormalized {
        /// The decoded label, or the whole input when registering.
        label: String,
    },

    /// Hyphens in the third and fourth position of a label.
    #[error("hyphens in the third and fourth position of {label:?}")]
    HyphenPositions {
        /// The offending label.
        label: String,
    },

    /// A label that starts or ends with a hyphen.
    #[error("leading or trailing hyphen in {label:?}")]
    LeadingTrailingHyphen {
        /// The offending label.
        label: String,
    },

    /// A label whose first character is a combining mark.
    #[error("leading combining mark in {label:?}")]
    LeadingCombiningMark {
        /// The offending label.
        label: String,
    },

    /// A decoded ACE label containing a character that is not allowed
    /// in canonical form.
    #[error("invalid character in decoded label {label:?}")]
    InvalidDecodedCharacter {
        /// The decoded label.
        label: String,
    },

    /// Punycode encoding or decoding failed for a label.
    #[error("punycode conversion failed for {label:?}")]
    Punycode {
        /// The label that failed to convert.
        label: String,
    },

    /// The converted name violates the DNS length limits
    /// (63 bytes per label, 253 bytes overall).
    #[error("DNS length limits violated by {name:?}")]
    DnsLength {
        /// The converted name, without its root dot.
        name: String,
    },

    /// A right-to-left domain violating the RFC 5893 bidi rule.
    #[error("bidi rule violated in {name:?}")]
    BidiRule {
        /// The mapped name that failed the rule.
        name: String,
    },

    /// A zero-width joiner or non-joiner without the context
    /// RFC 5892 appendix A requires.
    #[error("joiner without required context in {label:?}")]
    JoinerContext {
        /// The offending label.
        label: String,
    },
}

impl ConversionError {
    /// Creates a new `DisallowedCharacter` error.
    #[inline]
    pub fn disallowed_character(character: char) -> Self {
        Self::DisallowedCharacter { character }
    }

    /// Creates a new `NotNormalized` error.
    #[inline]
    pub fn not_normalized(label: impl Into<String>) -> Self {
        Self::NotNormalized {
            label: label.into(),
        }
    }

    /// Creates a new `HyphenPositions` error.
    #[inline]
    pub fn hyphen_positions(label: impl Into<String>) -> Self {
        Self::HyphenPositions {
            label: label.into(),
        }
    }

    /// Creates a new `LeadingTrailingHyphen` error.
    #[inline]
    pub fn leading_trailing_hyphen(label: impl Into<String>) -> Self {
        Self::LeadingTrailingHyphen {
            label: label.into(),
        }
    }

    /// Creates a new `LeadingCombiningMark` error.
    #[inline]
    pub fn leading_combining_mark(label: impl Into<String>) -> Self {
        Self::LeadingCombiningMark {
            label: label.into(),
        }
    }

    /// Creates a new `InvalidDecodedCharacter` error.
    #[inline]
    pub fn invalid_decoded_character(label: impl Into<String>) -> Self {
        Self::InvalidDecodedCharacter {
            label: label.into(),
        }
    }

    /// Creates a new `Punycode` error.
    #[inline]
    pub fn punycode(label: impl Into<String>) -> Self {
        Self::Punycode {
            label: label.into(),
        }
    }

    /// Creates a new `DnsLength` error.
    #[inline]
    pub fn dns_length(name: impl Into<String>) -> Self {
        Self::DnsLength { name: name.into() }
    }

    /// Creates a new `BidiRule` error.
    #[inline]
    pub fn bidi_rule(name: impl Into<String>) -> Self {
        Self::BidiRule { name: name.into() }
    }

    /// Creates a new `JoinerContext` error.
    #[inline]
    pub fn joiner_context(label: impl Into<String>) -> Self {
        Self::JoinerContext {
            label: label.into(),
        }
    }

    /// The stable short code identifying the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DisallowedCharacter { .. } => "P1",
            Self::NotNormalized { .. } => "V1",
            Self::HyphenPositions { .. } => "V2",
            Self::LeadingTrailingHyphen { .. } => "V3",
            Self::LeadingCombiningMark { .. } => "V5",
            Self::InvalidDecodedCharacter { .. } => "V6",
            Self::Punycode { .. } => "A3",
            Self::DnsLength { .. } => "A4",
            Self::BidiRule { .. } => "B",
            Self::JoinerContext { .. } => "C",
        }
    }
}

/// Violations recorded during one conversion.
///
/// The pipeline does not stop at the first problem: it keeps transforming and
/// records everything it finds, so the caller gets the best-effort output
/// together with the full list. Errors appear in the order the pipeline
/// visits them (mapping, then per-label checks, then the bidi pass, then
/// encoding and length limits), and the first entry is the violation a
/// fail-fast implementation would have reported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Errors {
    errors: Vec<ConversionError>,
}

impl Errors {
    /// Records a violation unless an equal one is already present.
    pub(crate) fn push(&mut self, error: ConversionError) {
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    /// True when no violation was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded violations, in detection order.
    #[inline]
    pub fn as_slice(&self) -> &[ConversionError] {
        &self.errors
    }

    /// The first recorded violation, if any.
    #[inline]
    pub fn first(&self) -> Option<&ConversionError> {
        self.errors.first()
    }

    /// The short codes of the recorded violations, in detection order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(ConversionError::code)
    }
}

impl From<Errors> for Result<(), Errors> {
    fn from(errors: Errors) -> Result<(), Errors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ConversionError;
    type IntoIter = std::slice::Iter<'a, ConversionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::error::Error for Errors {}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no errors");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "[{}] {}", error.code(), error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_deduplicates() {
        let mut errors = Errors::default();
        errors.push(ConversionError::disallowed_character('\u{2488}'));
        errors.push(ConversionError::punycode("xn--a"));
        errors.push(ConversionError::disallowed_character('\u{2488}'));
        assert_eq!(errors.as_slice().len(), 2);
        assert_eq!(errors.codes().collect::<Vec<_>>(), ["P1", "A3"]);
    }

    #[test]
    fn display_lists_codes() {
        let mut errors = Errors::default();
        errors.push(ConversionError::leading_trailing_hyphen("-abc"));
        errors.push(ConversionError::dns_length(""));
        let rendered = errors.to_string();
        assert!(rendered.starts_with("[V3]"));
        assert!(rendered.contains("[A4]"));
    }

    #[test]
    fn conversion_to_result() {
        let ok: Result<(), Errors> = Errors::default().into();
        assert!(ok.is_ok());

        let mut errors = Errors::default();
        errors.push(ConversionError::not_normalized("xn--a-tdbc"));
        let err: Result<(), Errors> = errors.into();
        assert_eq!(err.unwrap_err().first().unwrap().code(), "V1");
    }
}
