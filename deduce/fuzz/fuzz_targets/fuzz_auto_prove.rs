#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut lines = text.lines();
    let Some(goal) = lines.next() else {
        return;
    };

    let engine = deduce::Engine::new();
    let premises: Vec<&str> = lines.take(4).collect();
    if let Ok(mut proof) = engine.proof_for(&premises, goal) {
        let _ = proof.auto_prove(20);
        if proof.is_complete() {
            assert!(proof.validate().is_ok());
        }
    }
});
