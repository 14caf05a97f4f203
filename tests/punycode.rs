use idn::punycode::{decode, decode_to_string, encode_str};
use serde_json::Value;

fn one_test(decoded: &str, encoded: &str) {
    match decode(encoded) {
        Err(error) => panic!("Decoding {} failed with error {:?}", encoded, error),
        Ok(result) => {
            let result: String = result.into_iter().collect();
            assert_eq!(
                result, decoded,
                "Incorrect decoding of \"{}\"",
                encoded
            );
        }
    }
    match encode_str(decoded) {
        Err(error) => panic!("Encoding {} failed with error {:?}", decoded, error),
        Ok(result) => {
            assert_eq!(
                result, encoded,
                "Incorrect encoding of \"{}\"",
                decoded
            );
        }
    }
}

fn one_bad_test(encoded: &str, description: &str) {
    assert!(
        decode_to_string(encoded).is_err(),
        "Expected decoding of \"{}\" to fail ({})",
        encoded,
        description
    );
}

#[test]
fn punycode_fixtures() {
    let tests: Value = serde_json::from_str(include_str!("punycode_tests.json")).unwrap();
    for test in tests.as_array().expect("fixture is a JSON array") {
        let object = test.as_object().expect("fixture entry is an object");
        let encoded = object["encoded"].as_str().unwrap();
        if object.get("error").is_some() {
            let description = object
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("");
            one_bad_test(encoded, description);
        } else {
            one_test(object["decoded"].as_str().unwrap(), encoded);
        }
    }
}
