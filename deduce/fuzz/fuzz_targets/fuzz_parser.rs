#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(formula) = deduce::parse(text) {
            let printed = formula.to_string();
            let reparsed = deduce::parse(&printed).expect("printed formula must parse");
            assert_eq!(reparsed, formula);
        }
    }
});
