#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8)| {
    let (groups, negations) = input;
    let groups = (groups as usize % 120) + 1;
    let negations = negations as usize % 120;

    let mut text = format!("{}A", "¬".repeat(negations));
    for _ in 0..groups {
        text = format!("({} → B)", text);
    }

    let _ = deduce::parse(&text);
});
