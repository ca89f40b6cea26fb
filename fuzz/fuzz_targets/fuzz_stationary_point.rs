#![no_main]

use libfuzzer_sys::fuzz_target;

use polarfit_core::PolarCoefficients;

fuzz_target!(|data: [f64; 4]| {
    let [v1, v2, w1, w2] = data;
    let pc = PolarCoefficients::from_two_points_with_stationary_point(v1, v2, w1, w2);

    assert!(pc.a.is_finite() && pc.b.is_finite() && pc.c.is_finite());
    if pc.is_valid() {
        // Evaluation helpers must not panic on any fitted polar
        let _ = pc.min_sink();
        let _ = pc.best_glide();
        let _ = pc.glide_ratio(v2);
    } else {
        assert_eq!(pc, PolarCoefficients::invalid());
    }
});
