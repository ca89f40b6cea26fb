#![no_main]

use libfuzzer_sys::fuzz_target;

use polarfit_core::PolarCoefficients;

fuzz_target!(|data: [f64; 6]| {
    let [v1, v2, v3, w1, w2, w3] = data;
    let pc = PolarCoefficients::from_three_points(v1, v2, v3, w1, w2, w3);

    // Either a finite polar or the sentinel, never NaN or infinity
    assert!(pc.a.is_finite() && pc.b.is_finite() && pc.c.is_finite());
    assert!(pc.is_valid() || pc == PolarCoefficients::invalid());

    // Argument order must not matter
    let swapped = PolarCoefficients::from_three_points(v3, v1, v2, w3, w1, w2);
    assert_eq!(pc.a.to_bits(), swapped.a.to_bits());
    assert_eq!(pc.b.to_bits(), swapped.b.to_bits());
    assert_eq!(pc.c.to_bits(), swapped.c.to_bits());
});
