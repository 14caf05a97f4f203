//! Runs the UTS #46 `IdnaTest.txt` fixture: semicolon-separated lines of
//! `flag; source; toUnicode; toASCII` where the flag selects transitional
//! (`T`), non-transitional (`N`) or both (`B`), empty fields inherit
//! (toUnicode from source, toASCII from toUnicode), and a bracketed field
//! names the error codes the conversion must report.

use std::borrow::Cow;

use idn::{Errors, Profile};

fn unescape(input: &str) -> String {
    fn hex4(chars: &mut std::str::Chars<'_>) -> u32 {
        let mut value = 0;
        for _ in 0..4 {
            let digit = chars.next().expect("truncated \\u escape");
            value = value * 16 + digit.to_digit(16).expect("bad hex digit in \\u escape");
        }
        value
    }

    let mut output = String::new();
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let unit = hex4(&mut chars);
                let scalar = if (0xD800..0xDC00).contains(&unit) {
                    assert_eq!(chars.next(), Some('\\'), "lone high surrogate");
                    assert_eq!(chars.next(), Some('u'), "lone high surrogate");
                    let low = hex4(&mut chars);
                    assert!((0xDC00..0xE000).contains(&low), "bad low surrogate");
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                output.push(char::from_u32(scalar).expect("escape is not a scalar value"));
            }
            other => panic!("unsupported escape \\{:?}", other),
        }
    }
    output
}

fn check(
    failures: &mut Vec<String>,
    line: usize,
    transitional: bool,
    direction: &str,
    conversion: (Cow<'_, str>, Result<(), Errors>),
    expected: &str,
) {
    let (output, result) = conversion;
    let mode = if transitional { "T" } else { "N" };
    if let Some(codes) = expected.strip_prefix('[').and_then(|e| e.strip_suffix(']')) {
        match result {
            Ok(()) => failures.push(format!(
                "line {} {} {}: expected [{}], conversion reported no errors (output {:?})",
                line, mode, direction, codes, output
            )),
            Err(errors) => {
                if !errors.codes().any(|code| codes.contains(code)) {
                    failures.push(format!(
                        "line {} {} {}: expected [{}], got {}",
                        line, mode, direction, codes, errors
                    ));
                }
            }
        }
    } else {
        let expected = unescape(expected);
        if output != expected {
            failures.push(format!(
                "line {} {} {}: expected {:?}, got {:?}",
                line, mode, direction, expected, output
            ));
        }
        if let Err(errors) = result {
            failures.push(format!(
                "line {} {} {}: unexpected errors {}",
                line, mode, direction, errors
            ));
        }
    }
}

#[test]
fn conformance_fixture() {
    let mut total = 0;
    let mut failures = Vec::new();
    for (index, line) in include_str!("IdnaTest.txt").lines().enumerate() {
        let number = index + 1;
        let line = line.split('#').next().unwrap().trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        assert_eq!(fields.len(), 4, "line {}: expected 4 fields", number);
        let source = unescape(fields[1]);
        let to_unicode = if fields[2].is_empty() {
            fields[1]
        } else {
            fields[2]
        };
        let to_ascii = if fields[3].is_empty() {
            to_unicode
        } else {
            fields[3]
        };

        let modes: &[bool] = match fields[0] {
            "T" => &[true],
            "N" => &[false],
            "B" => &[true, false],
            other => panic!("line {}: unknown applicability flag {:?}", number, other),
        };
        for &transitional in modes {
            let profile = Profile::default()
                .transitional(transitional)
                .verify_dns_length(true)
                .check_hyphens(true);
            check(
                &mut failures,
                number,
                transitional,
                "toUnicode",
                profile.to_unicode(&source),
                to_unicode,
            );
            check(
                &mut failures,
                number,
                transitional,
                "toASCII",
                profile.to_ascii(&source),
                to_ascii,
            );
            total += 2;
        }
    }
    assert!(total > 0, "no test cases parsed");
    assert!(
        failures.is_empty(),
        "{} of {} checks failed:\n{}",
        failures.len(),
        total,
        failures.join("\n")
    );
}
