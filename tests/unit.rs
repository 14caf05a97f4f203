use std::borrow::Cow;

use idn::{to_ascii, to_unicode, ConversionError, Errors, Profile};
use matches::assert_matches;

fn ok<'a>(conversion: (Cow<'a, str>, Result<(), Errors>)) -> Cow<'a, str> {
    let (output, result) = conversion;
    result.unwrap_or_else(|e| panic!("unexpected errors {} (output {:?})", e, output));
    output
}

fn err(conversion: (Cow<'_, str>, Result<(), Errors>)) -> (Cow<'_, str>, Errors) {
    let (output, result) = conversion;
    let errors = result.expect_err("expected the conversion to report errors");
    (output, errors)
}

#[test]
fn free_functions_use_the_default_profile() {
    assert_eq!(ok(to_ascii("m\u{FC}nchen.de")), "xn--mnchen-3ya.de");
    assert_eq!(ok(to_unicode("xn--mnchen-3ya.de")), "m\u{FC}nchen.de");
    assert_eq!(ok(to_ascii("\u{9EDE}\u{5FC3}.example")), "xn--15tr81l.example");
    assert_eq!(ok(to_ascii("a.w\u{E9}b.com")), "a.xn--wb-bja.com");
}

#[test]
fn to_ascii_is_idempotent() {
    let (first, result) = to_ascii("m\u{FC}nchen.de");
    assert!(result.is_ok());
    assert_eq!(ok(to_ascii(&first)), first);
}

#[test]
fn ascii_domains_are_borrowed() {
    let (output, result) = to_ascii("www.example.com");
    assert!(result.is_ok());
    assert_matches!(output, Cow::Borrowed("www.example.com"));

    let (output, result) = to_unicode("www.example.com");
    assert!(result.is_ok());
    assert_matches!(output, Cow::Borrowed(_));
}

#[test]
fn transitional_maps_deviation_characters() {
    assert_eq!(ok(Profile::resolve().to_ascii("fa\u{DF}.de")), "fass.de");
    assert_eq!(ok(Profile::display().to_ascii("fa\u{DF}.de")), "xn--fa-hia.de");
    assert_eq!(ok(Profile::resolve().to_unicode("xn--fa-hia.de")), "fa\u{DF}.de");
    assert_eq!(ok(Profile::display().to_unicode("xn--fa-hia.de")), "fa\u{DF}.de");
}

#[test]
fn mapping_normalizes_to_nfc() {
    // U+0061 U+0323 U+0322 composes to U+1EA1 U+0322.
    assert_eq!(ok(Profile::resolve().to_ascii("a\u{323}\u{322}")), "xn--jta191l");
    assert_eq!(
        ok(Profile::display().to_unicode("a\u{323}\u{322}")),
        "\u{1EA1}\u{322}"
    );
}

#[test]
fn disallowed_character_reports_first_offender() {
    let (output, errors) = err(Profile::resolve().to_ascii("lab\u{2490}be"));
    assert_eq!(output, "xn--labbe-zh9b");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::disallowed_character('\u{2490}'))
    );

    let (output, errors) = err(Profile::display().to_unicode("lab\u{2490}be"));
    assert_eq!(output, "lab\u{2490}be");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["P1"]);

    let (output, _) = err(Profile::resolve().to_ascii("plan\u{2490}fa\u{DF}.de"));
    assert_eq!(output, "xn--planfass-c31e.de");
}

#[test]
fn std3_rules_are_opt_in() {
    assert_eq!(ok(to_ascii("a=b.com")), "a=b.com");

    let (output, errors) = err(Profile::resolve().to_ascii("a=b.com"));
    assert_eq!(output, "a=b.com");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::disallowed_character('='))
    );
}

#[test]
fn decoded_labels_must_be_normalized() {
    let (output, errors) = err(Profile::resolve().to_ascii("xn--a-tdbc.com"));
    assert_eq!(output, "xn--a-tdbc.com");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::not_normalized("a\u{323}\u{322}"))
    );

    // Decoded output is never re-normalized.
    let (output, errors) = err(Profile::display().to_unicode("xn--a-tdbc.com"));
    assert_eq!(output, "a\u{323}\u{322}.com");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["V1"]);
}

#[test]
fn decoded_labels_must_survive_mapping() {
    // "xn--a" decodes to U+0080, which no profile allows.
    let (output, errors) = err(Profile::display().to_unicode("xn--a"));
    assert_eq!(output, "\u{80}");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["V6"]);
}

#[test]
fn punycode_failures_keep_the_label() {
    let (output, errors) = err(Profile::resolve().to_ascii("xn--99999999999999999999.com"));
    assert_eq!(output, "xn--99999999999999999999.com");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::punycode("xn--99999999999999999999"))
    );
}

#[test]
fn empty_ace_payload_is_a_conversion_failure() {
    let (output, errors) = err(Profile::display().to_unicode("xn--"));
    assert_eq!(output, "xn--");
    assert_eq!(errors.first(), Some(&ConversionError::punycode("xn--")));

    let (output, errors) = err(Profile::resolve().to_ascii("xn--.example"));
    assert_eq!(output, "xn--.example");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["A3"]);

    // The raw profile reports malformed ACE the same way it reports
    // bad digits, and the default profile agrees.
    assert!(Profile::punycode().to_unicode("xn--").1.is_err());
    assert!(to_unicode("xn--").1.is_err());
}

#[test]
fn joiner_context_is_enforced_non_transitionally() {
    assert_eq!(ok(Profile::resolve().to_ascii("a\u{200C}b")), "ab");

    let (output, errors) = err(Profile::display().to_unicode("a\u{200C}b"));
    assert_eq!(output, "a\u{200C}b");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["C"]);

    let (output, errors) = err(Profile::resolve().to_ascii("xn--ab-j1t"));
    assert_eq!(output, "xn--ab-j1t");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["C"]);

    // ZWNJ after a virama is legitimate.
    assert_eq!(
        ok(Profile::display().to_ascii("\u{915}\u{94D}\u{200C}\u{937}")),
        "xn--11b2ezcs70k"
    );
}

#[test]
fn bidi_rule_reports_the_whole_domain() {
    let (output, errors) = err(Profile::resolve().to_ascii("gr\u{FECB}\u{FEAE}\u{FE91}\u{FEF2}.de"));
    assert_eq!(output, "xn--gr-gtd9a1b0g.de");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::bidi_rule(
            "gr\u{639}\u{631}\u{628}\u{64A}.de"
        ))
    );

    let (output, errors) = err(Profile::resolve().to_ascii("\u{5D0}\u{661}x"));
    assert_eq!(output, "xn--x-zhc94b");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["B"]);

    let (_, errors) = err(Profile::resolve().to_ascii("0a.\u{5D0}"));
    assert_eq!(
        errors.first(),
        Some(&ConversionError::bidi_rule("0a.\u{5D0}"))
    );

    // RTL labels with Arabic-Indic digits and a separate LTR-digit label.
    assert_eq!(
        ok(Profile::resolve().to_ascii("\u{5D0}\u{660}.\u{5D1}01")),
        "xn--4db20a.xn--01-xld"
    );
}

#[test]
fn hyphen_restrictions() {
    let (output, errors) = err(Profile::resolve().to_ascii("-a.b-"));
    assert_eq!(output, "-a.b-");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["V3", "V3"]);
    assert_eq!(
        errors.first(),
        Some(&ConversionError::leading_trailing_hyphen("-a"))
    );

    let (_, errors) = err(Profile::resolve().to_ascii("ab--cd"));
    assert_eq!(
        errors.first(),
        Some(&ConversionError::hyphen_positions("ab--cd"))
    );

    // The third-and-fourth-position rule skips four-character labels,
    // so "ab--" only trips the trailing-hyphen check.
    let (output, errors) = err(Profile::resolve().to_ascii("ab--"));
    assert_eq!(output, "ab--");
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["V3"]);

    // Off by default.
    assert_eq!(ok(to_ascii("-a.b-")), "-a.b-");
    assert_eq!(ok(to_ascii("ab--cd")), "ab--cd");
}

#[test]
fn leading_combining_mark_is_rejected() {
    let (output, errors) = err(Profile::resolve().to_ascii("\u{301}abc"));
    assert_eq!(output, "xn--abc-jdc");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::leading_combining_mark("\u{301}abc"))
    );
}

#[test]
fn registration_validates_input_as_written() {
    let (output, errors) = err(Profile::registration().to_ascii("Fa\u{DF}.de"));
    assert_eq!(output, "xn--Fa-hia.de");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::disallowed_character('F'))
    );

    assert_eq!(ok(Profile::registration().to_ascii("fa\u{DF}.de")), "xn--fa-hia.de");
    assert_eq!(ok(Profile::registration().to_ascii("fass.de")), "fass.de");

    // The NFC requirement applies to the whole input, before any mapping.
    let (output, errors) = err(Profile::registration().to_ascii("a\u{323}\u{322}.de"));
    assert_eq!(output, "xn--a-tdbc.de");
    assert_eq!(
        errors.first(),
        Some(&ConversionError::not_normalized("a\u{323}\u{322}.de"))
    );
}

#[test]
fn dns_length_checks_are_opt_in() {
    assert_eq!(ok(Profile::resolve().to_ascii("a..b")), "a..b");

    let verify = Profile::resolve().verify_dns_length(true);
    let (_, errors) = err(verify.to_ascii("a..b"));
    assert_eq!(errors.first(), Some(&ConversionError::dns_length("a..b")));
    assert_matches!(err(verify.to_ascii("")).1.first(), Some(ConversionError::DnsLength { .. }));
    assert_matches!(
        err(verify.to_ascii(".example")).1.first(),
        Some(ConversionError::DnsLength { .. })
    );

    let label63 = "b".repeat(63);
    assert_eq!(ok(verify.to_ascii(&format!("a.{}", label63))), format!("a.{}", label63));
    let label64 = "b".repeat(64);
    let (_, errors) = err(verify.to_ascii(&format!("a.{}", label64)));
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["A4"]);

    let name253 = format!(
        "{}.{}.{}.{}",
        "c".repeat(63),
        "d".repeat(63),
        "e".repeat(63),
        "f".repeat(61)
    );
    assert_eq!(ok(verify.to_ascii(&name253)), name253);
    let name254 = format!("{}f", name253);
    assert!(verify.to_ascii(&name254).1.is_err());

    // One trailing dot is a root-label separator, not an empty label.
    assert_eq!(ok(verify.to_ascii("example.com.")), "example.com.");
}

#[test]
fn leading_dots_are_stripped_on_request() {
    let strip = Profile::default().remove_leading_dots(true);
    assert_eq!(ok(strip.to_unicode("..example.com")), "example.com");
    assert_eq!(ok(strip.to_ascii(".m\u{FC}nchen.de")), "xn--mnchen-3ya.de");
    assert_eq!(ok(to_unicode("..example.com")), "..example.com");
}

#[test]
fn punycode_profile_converts_without_validation() {
    let raw = Profile::punycode();
    assert_eq!(ok(raw.to_unicode("xn--tda")), "\u{FC}");
    assert_eq!(ok(raw.to_ascii("\u{FC}")), "xn--tda");
    // No decoded-label criteria, no bidi, no joiner checks.
    assert_eq!(ok(raw.to_unicode("xn--a")), "\u{80}");
    assert_eq!(ok(raw.to_unicode("xn--ab-j1t")), "a\u{200C}b");
}

#[test]
fn strict_domain_name_switch() {
    let strict = Profile::default().strict_domain_name(true);
    assert!(strict.to_ascii("a=b.com").1.is_err());
    assert!(strict.to_ascii("0a.\u{5D0}").1.is_err());

    let relaxed = Profile::resolve().strict_domain_name(false);
    assert_eq!(ok(relaxed.to_ascii("a=b.com")), "a=b.com");
    assert_eq!(ok(relaxed.to_ascii("0a.\u{5D0}")), "0a.xn--4db");
}

#[test]
fn uppercase_ace_prefix_is_recognized() {
    assert_eq!(ok(to_unicode("XN--BCHER-KVA.example")), "b\u{FC}cher.example");
    // Registration skips mapping, so the prefix arrives in original case.
    let (output, _) = Profile::registration().to_unicode("XN--tda");
    assert_eq!(output, "\u{FC}");
}

#[test]
fn error_aggregate_deduplicates() {
    let (_, errors) = err(Profile::resolve().to_ascii("\u{2488}\u{2488}\u{2488}com"));
    assert_eq!(errors.codes().collect::<Vec<_>>(), ["P1"]);
    assert_eq!(errors.as_slice().len(), 1);
}

#[test]
fn empty_input_stays_empty() {
    let (output, result) = to_ascii("");
    assert_eq!(output, "");
    assert!(result.is_ok());

    let verify = Profile::default().verify_dns_length(true);
    assert!(verify.to_ascii("").1.is_err());
}
