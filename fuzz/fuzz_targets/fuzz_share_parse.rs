#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_share::Share;

// Fuzzing target for the two share deserializers
//
// Arbitrary text goes through the string form parser and the structured
// JSON parser. Both must reject malformed input with a typed error and
// never panic; anything that parses must survive a serialize-reparse
// round trip.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(share) = text.parse::<Share>() {
        let reparsed: Share = share.to_string().parse().expect("round trip");
        assert_eq!(reparsed, share);
        let _ = share.verify_checksum();
    }

    if let Ok(share) = Share::from_json(text) {
        let reparsed = Share::from_json(&share.to_json()).expect("round trip");
        assert_eq!(reparsed, share);
    }
});
