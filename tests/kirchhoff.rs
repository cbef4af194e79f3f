//! Circuit-law checks for the phasor solver.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rlc_phasor::prelude::*;

fn close(a: CScalar, b: CScalar, scale: f64) -> bool {
    (a - b).norm() <= 1e-9 * scale.max(1e-300)
}

/// Samples `10^e` with the exponent uniform over `decades`, so every order of
/// magnitude is hit equally often.
fn log_uniform(decades: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    decades.prop_map(|e| 10.0_f64.powf(e))
}

fn params_strategy() -> impl Strategy<Value = CircuitParameters> {
    (
        log_uniform(-18.0..18.0),
        log_uniform(-18.0..18.0),
        log_uniform(-18.0..18.0),
        log_uniform(-18.0..18.0),
        log_uniform(-18.0..18.0),
        log_uniform(-18.0..18.0),
        log_uniform(-6.0..6.0),
        -179.9_f64..180.0,
    )
        .prop_map(|(f, c, l, r1, r2, r3, mag, deg)| {
            CircuitParameters::new(
                f,
                c,
                l,
                [r1, r2, r3],
                ReferenceVoltage::Polar {
                    magnitude: mag,
                    angle_deg: deg,
                },
            )
        })
}

proptest! {

#[test]
fn prop_parallel_combination_identity(params in params_strategy()) {
    let s = solve(&params).unwrap();
    prop_assert!(s.z_total().is_finite() && s.z_total().norm() > 0.0, "{}", s.z_total());
    let one = CScalar::new(1.0, 0.0);
    let (y1, y2) = (one / s.z_branch1(), one / s.z_branch2());
    let lhs = one / s.z_total();
    let rhs = y1 + y2;
    prop_assert!(close(lhs, rhs, y1.norm() + y2.norm()), "{lhs} vs {rhs}");
}

#[test]
fn prop_total_current_times_impedance_is_reference(params in params_strategy()) {
    let s = solve(&params).unwrap();
    prop_assert!(s.i_total().is_finite(), "{}", s.i_total());
    let v = s.i_total() * s.z_total();
    prop_assert!(close(v, s.v_ref(), s.v_ref().norm()), "{v} vs {}", s.v_ref());
}

#[test]
fn prop_kirchhoff_voltage_law_per_branch(params in params_strategy()) {
    let s = solve(&params).unwrap();
    let branch1 = s.v_c() + s.v_r1() + s.v_r2();
    let branch2 = s.v_r3() + s.v_l();
    let scale = s.v_c().norm() + s.v_r1().norm() + s.v_r2().norm() + s.v_ref().norm();
    prop_assert!(close(branch1, s.v_ref(), scale), "{branch1} vs {}", s.v_ref());
    let scale = s.v_r3().norm() + s.v_l().norm() + s.v_ref().norm();
    prop_assert!(close(branch2, s.v_ref(), scale), "{branch2} vs {}", s.v_ref());
}

#[test]
fn prop_kirchhoff_current_law(params in params_strategy()) {
    let s = solve(&params).unwrap();
    let sum = s.i_branch1() + s.i_branch2();
    let scale = s.i_branch1().norm() + s.i_branch2().norm();
    prop_assert!(close(sum, s.i_total(), scale), "{sum} vs {}", s.i_total());
}

#[test]
fn prop_polar_rectangular_round_trip(mag in log_uniform(-12.0..12.0), deg in -179.99_f64..=180.0) {
    let z = from_polar_degrees(mag, deg);
    let back = Polar::from_complex(CScalar::new(z.re, z.im));
    prop_assert!((back.magnitude - mag).abs() <= 1e-9 * mag);
    prop_assert!((back.angle_deg() - deg).abs() <= 1e-9);
}

}

#[test]
fn reference_scenario_at_one_kilohertz() {
    let params = CircuitParameters::default();
    let s = solve(&params).unwrap();

    assert_abs_diff_eq!(s.omega(), 2.0 * std::f64::consts::PI * 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s.z_c().re, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s.z_c().im, -159.15, epsilon = 5e-3);
    assert_abs_diff_eq!(s.z_branch1().re, 3000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s.z_branch1().im, -159.15, epsilon = 5e-3);
    // jωL with L = 1000 µH.
    assert_abs_diff_eq!(s.z_l().im, 6.283, epsilon = 1e-3);
    assert_abs_diff_eq!(s.z_branch2().re, 3000.0, epsilon = 1e-9);

    let expected_total = CScalar::new(1.0, 0.0)
        / (CScalar::new(1.0, 0.0) / s.z_branch1() + CScalar::new(1.0, 0.0) / s.z_branch2());
    assert_abs_diff_eq!(s.z_total().re, expected_total.re, epsilon = 1e-9);
    assert_abs_diff_eq!(s.z_total().im, expected_total.im, epsilon = 1e-9);

    let v = s.i_total() * s.z_total();
    assert_abs_diff_eq!(v.re, 10.0, epsilon = 1e-6);
    assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-6);
}

#[test]
fn rectangular_reference_is_used_verbatim() {
    let params = CircuitParameters::default().with_reference(ReferenceVoltage::Rectangular {
        re: 3.0,
        im: -4.0,
    });
    let s = solve(&params).unwrap();
    assert_eq!(s.v_ref(), CScalar::new(3.0, -4.0));
    assert_eq!(format_rectangular(s.v_ref()), "3.00 + -4.00j");
}

#[test]
fn zero_valued_reactive_inputs_are_rejected() {
    for (field, params) in [
        ("frequency_hz", CircuitParameters::default().with_frequency(0.0)),
        ("capacitance_f", CircuitParameters::default().with_microfarads(0.0)),
        ("inductance_h", CircuitParameters::default().with_microhenries(0.0)),
    ] {
        match solve(&params) {
            Err(CircuitError::InvalidParameter { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidParameter for {field}, got {other:?}"),
        }
    }
}

#[test]
fn report_matches_formatted_state() {
    let s = solve(&CircuitParameters::default()).unwrap();
    let report = s.report();
    let titles: Vec<_> = report.sections().iter().map(|sec| sec.title.as_str()).collect();
    assert_eq!(titles, ["Impedances", "Currents", "Component voltages"]);
    assert_eq!(
        report.readout("Z Total").map(|r| r.polar.clone()),
        Some(format_polar(s.z_total()))
    );
    assert_eq!(
        report.readout("V_L").map(|r| r.polar.clone()),
        Some(format_polar(s.v_l()))
    );
    assert!(report.readout("V_ref").is_none());
}
