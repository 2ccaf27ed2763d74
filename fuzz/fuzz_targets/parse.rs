#![no_main]
use libfuzzer_sys::fuzz_target;
use routeurl::{parse_with, ParserConfig};

fuzz_target!(|data: (String, bool)| {
    let (input, strict) = data;

    let config = match strict {
        true => ParserConfig::strict(),
        false => ParserConfig::default(),
    };

    if let Ok(root) = parse_with(&input, config) {
        let _ = root.to_string();
    }
});
