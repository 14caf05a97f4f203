//! Per-code-point mapping step of UTS #46 processing.
//!
//! The mapping data lives in `uts46_mapping_table.rs`, generated from
//! `IdnaMappingTable.txt` by `scripts/make_unicode_tables.py`. Code points
//! are looked up in a range table first, then resolved through an index
//! table so that runs mapping to a single status share one entry.

use self::Mapping::*;
use std::cmp::Ordering::{Equal, Greater, Less};

use crate::error::{ConversionError, Errors};
use crate::uts46::Profile;

include!("uts46_mapping_table.rs");

#[derive(Debug)]
pub(crate) struct StringTableSlice {
    // Unsigned number of the beginning of the slice in STRING_TABLE,
    // split into bytes so entries stay small.
    byte_start_lo: u8,
    byte_start_hi: u8,
    byte_len: u8,
}

fn decode_slice(slice: &StringTableSlice) -> &'static str {
    let lo = slice.byte_start_lo as usize;
    let hi = slice.byte_start_hi as usize;
    let start = (hi << 8) | lo;
    let len = slice.byte_len as usize;
    &STRING_TABLE[start..(start + len)]
}

#[repr(u8)]
#[derive(Debug)]
pub(crate) enum Mapping {
    Valid,
    Ignored,
    Mapped(StringTableSlice),
    Deviation(StringTableSlice),
    Disallowed,
    DisallowedStd3Valid,
    DisallowedStd3Mapped(StringTableSlice),
}

struct Range {
    from: char,
    to: char,
}

pub(crate) fn find_char(codepoint: char) -> &'static Mapping {
    let r = TABLE.binary_search_by(|range| {
        if codepoint > range.to {
            Less
        } else if codepoint < range.from {
            Greater
        } else {
            Equal
        }
    });
    r.ok()
        .map(|i| {
            const SINGLE_MARKER: u16 = 1 << 15;

            let x = INDEX_TABLE[i];
            let single = (x & SINGLE_MARKER) != 0;
            let offset = (x & !SINGLE_MARKER) as usize;

            if single {
                &MAPPING_TABLE[offset]
            } else {
                &MAPPING_TABLE[offset + (codepoint as usize - TABLE[i].from as usize)]
            }
        })
        .unwrap()
}

pub(crate) fn map_char(codepoint: char, profile: &Profile, output: &mut String, errors: &mut Errors) {
    if let '.' | '-' | 'a'..='z' | '0'..='9' = codepoint {
        output.push(codepoint);
        return;
    }
    match *find_char(codepoint) {
        Mapping::Valid => output.push(codepoint),
        Mapping::Ignored => {}
        Mapping::Mapped(ref slice) => output.push_str(decode_slice(slice)),
        Mapping::Deviation(ref slice) => {
            if profile.transitional_processing {
                output.push_str(decode_slice(slice))
            } else {
                output.push(codepoint)
            }
        }
        Mapping::Disallowed => {
            errors.push(ConversionError::disallowed_character(codepoint));
            output.push(codepoint);
        }
        Mapping::DisallowedStd3Valid => {
            if profile.use_std3_ascii_rules {
                errors.push(ConversionError::disallowed_character(codepoint));
            }
            output.push(codepoint);
        }
        Mapping::DisallowedStd3Mapped(ref slice) => {
            if profile.use_std3_ascii_rules {
                errors.push(ConversionError::disallowed_character(codepoint));
                output.push(codepoint);
            } else {
                output.push_str(decode_slice(slice));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert!(matches!(find_char('a'), Mapping::Valid));
        assert!(matches!(find_char('='), Mapping::DisallowedStd3Valid));
        assert!(matches!(find_char('\u{2490}'), Mapping::Disallowed));
        match find_char('A') {
            Mapping::Mapped(slice) => assert_eq!(decode_slice(slice), "a"),
            other => panic!("unexpected mapping for 'A': {:?}", other),
        }
        match find_char('\u{DF}') {
            Mapping::Deviation(slice) => assert_eq!(decode_slice(slice), "ss"),
            other => panic!("unexpected mapping for eszett: {:?}", other),
        }
        match find_char('\u{200D}') {
            Mapping::Deviation(slice) => assert_eq!(decode_slice(slice), ""),
            other => panic!("unexpected mapping for ZWJ: {:?}", other),
        }
    }

    #[test]
    fn deviation_depends_on_transitional() {
        let mut output = String::new();
        let mut errors = Errors::default();
        map_char('\u{DF}', &Profile::resolve(), &mut output, &mut errors);
        assert_eq!(output, "ss");
        output.clear();
        map_char('\u{DF}', &Profile::display(), &mut output, &mut errors);
        assert_eq!(output, "\u{DF}");
        assert!(errors.is_empty());
    }

    #[test]
    fn std3_keeps_original_and_reports() {
        let mut output = String::new();
        let mut errors = Errors::default();
        map_char('=', &Profile::default(), &mut output, &mut errors);
        assert_eq!(output, "=");
        assert!(errors.is_empty());

        map_char('=', &Profile::resolve(), &mut output, &mut errors);
        assert_eq!(
            errors.first(),
            Some(&ConversionError::disallowed_character('='))
        );

        output.clear();
        errors = Errors::default();
        map_char('\u{2474}', &Profile::default(), &mut output, &mut errors);
        assert_eq!(output, "(1)", "mapped when not restricted to STD3");
        output.clear();
        map_char('\u{2474}', &Profile::resolve(), &mut output, &mut errors);
        assert_eq!(output, "\u{2474}", "kept verbatim under STD3");
        assert!(!errors.is_empty());
    }

    #[test]
    fn ignored_code_points_vanish() {
        let mut output = String::new();
        let mut errors = Errors::default();
        map_char('\u{AD}', &Profile::default(), &mut output, &mut errors);
        assert!(output.is_empty());
        assert!(errors.is_empty());
    }
}
