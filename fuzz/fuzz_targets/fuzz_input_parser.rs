#![no_main]

use libfuzzer_sys::fuzz_target;
use scrap_coords_engine::Calculator;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut fields = text.split('\n');
    let inputs: [&str; 4] = std::array::from_fn(|_| fields.next().unwrap_or(""));

    let calculator = Calculator::default();
    // Fehler sind Ergebnisse, eine Lösung liegt immer im Kartenbereich
    if let Ok(position) = calculator.locate(&inputs) {
        assert!(calculator.bounds.contains(position));
    }
    let _ = calculator.distances(inputs[0], inputs[1]);
});
