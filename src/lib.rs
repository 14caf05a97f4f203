//! This Rust crate converts internationalized domain names between their
//! Unicode and ASCII-Compatible Encoding (Punycode) forms, implementing
//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/)
//! and [Punycode (RFC 3492)](https://tools.ietf.org/html/rfc3492).
//!
//! Quoting from [UTS #46’s introduction](http://www.unicode.org/reports/tr46/#Introduction):
//!
//! > Initially, domain names were restricted to ASCII characters.
//! > A system was introduced in 2003 for internationalized domain names (IDN).
//! > This system is called Internationalizing Domain Names for Applications,
//! > or IDNA2003 for short.
//! > This mechanism supports IDNs by means of a client software transformation
//! > into a format known as Punycode.
//! > A revision of IDNA was approved in 2010 (IDNA2008).
//! > This revision has a number of incompatibilities with IDNA2003.
//! >
//! > The incompatibilities force implementers of client software,
//! > such as browsers and emailers,
//! > to face difficult choices during the transition period
//! > as registries shift from IDNA2003 to IDNA2008.
//! > This document specifies a mechanism
//! > that minimizes the impact of this transition for client software,
//! > allowing client software to access domains that are valid under either system.
//!
//! Conversion is driven by a [`Profile`]: a set of options selecting
//! transitional or non-transitional processing, lookup or registration
//! mapping, and the individual validity checks. Both directions are
//! best-effort. They always return a converted name together with a
//! `Result` listing everything that was wrong with the input, so a
//! caller can choose between strict rejection and Unicode's
//! recommended keep-going behavior.

pub mod punycode;

mod error;
mod mapping;
mod uts46;
mod validate;

pub use crate::error::{ConversionError, Errors};
pub use crate::uts46::Profile;

use std::borrow::Cow;

/// Convert a domain name to its ASCII form with the default profile.
///
/// Normalizes characters (upper-case to lower-case and other kinds of
/// equivalence) and encodes non-ASCII labels with Punycode as necessary.
/// The returned string borrows the input when no conversion was needed.
pub fn to_ascii(domain: &str) -> (Cow<'_, str>, Result<(), Errors>) {
    Profile::default().to_ascii(domain)
}

/// Convert a domain name to its Unicode form with the default profile.
///
/// Normalizes characters (upper-case to lower-case and other kinds of
/// equivalence) and decodes Punycode labels as necessary. The `Result`
/// may report validity problems, but a converted string is always
/// returned.
pub fn to_unicode(domain: &str) -> (Cow<'_, str>, Result<(), Errors>) {
    Profile::default().to_unicode(domain)
}
