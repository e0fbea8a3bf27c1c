//! 밀도 선형 근사 모델 회귀 테스트.
use lpg_density_dashboard::lpg::density::{
    calculate_density, density_delta, format_temperature,
};
use lpg_density_dashboard::lpg::properties::GasType;
use lpg_density_dashboard::units::{format_density, DensityUnit};

#[test]
fn propane_reference_density_at_15c() {
    let calc = calculate_density(15.0, GasType::Propane, 60);
    assert!(
        (calc.density_kg_per_l - 0.508).abs() < 1e-9,
        "expected 0.508, got {}",
        calc.density_kg_per_l
    );
}

#[test]
fn butane_reference_density_at_15c() {
    let calc = calculate_density(15.0, GasType::Butane, 60);
    assert!((calc.density_kg_per_l - 0.573).abs() < 1e-9);
}

#[test]
fn temperature_clamped_to_valid_range_before_formula() {
    // 상한 밖: T=100은 T=50과 동일하게 동작해야 한다.
    let high = calculate_density(100.0, GasType::Propane, 60);
    let top = calculate_density(50.0, GasType::Propane, 60);
    assert!((high.density_kg_per_l - top.density_kg_per_l).abs() < 1e-12);
    assert!((high.temperature_c - 50.0).abs() < 1e-12);

    // 하한 밖도 동일.
    let low = calculate_density(-80.0, GasType::Butane, 60);
    let bottom = calculate_density(-50.0, GasType::Butane, 60);
    assert!((low.density_kg_per_l - bottom.density_kg_per_l).abs() < 1e-12);
    assert!((low.temperature_c + 50.0).abs() < 1e-12);
}

#[test]
fn mixture_blend_matches_linear_formula_at_15c() {
    for percent in (0..=100).step_by(5) {
        let fraction = f64::from(percent) / 100.0;
        let expected = 0.508 * fraction + 0.573 * (1.0 - fraction);
        let calc = calculate_density(15.0, GasType::Mixed, percent as u8);
        // 결과는 소수 4자리 반올림이므로 반올림 오차까지 허용한다.
        assert!(
            (calc.density_kg_per_l - expected).abs() < 5e-5,
            "percent={percent}: expected {expected}, got {}",
            calc.density_kg_per_l
        );
    }
}

#[test]
fn mixture_endpoints_match_pure_gases() {
    let pure_propane = calculate_density(25.0, GasType::Propane, 60);
    let mixed_100 = calculate_density(25.0, GasType::Mixed, 100);
    assert!((pure_propane.density_kg_per_l - mixed_100.density_kg_per_l).abs() < 1e-12);

    let pure_butane = calculate_density(25.0, GasType::Butane, 60);
    let mixed_0 = calculate_density(25.0, GasType::Mixed, 0);
    assert!((pure_butane.density_kg_per_l - mixed_0.density_kg_per_l).abs() < 1e-12);
}

#[test]
fn butane_at_minus_50_formats_as_expected() {
    // 0.573 + (-0.00104)·(-65) = 0.6406, 안전 상한(0.65) 이내.
    let calc = calculate_density(-50.0, GasType::Butane, 60);
    assert!((calc.density_kg_per_l - 0.6406).abs() < 1e-9);
    assert_eq!(
        format_density(calc.density_kg_per_l, DensityUnit::KgPerLiter),
        "0.641"
    );
}

#[test]
fn density_always_within_safety_band() {
    let gases = [GasType::Propane, GasType::Butane, GasType::Mixed];
    for gas in gases {
        let mut t = -100.0;
        while t <= 100.0 {
            let calc = calculate_density(t, gas, 60);
            assert!(
                (0.45..=0.65).contains(&calc.density_kg_per_l),
                "{gas:?} at {t}°C gave {}",
                calc.density_kg_per_l
            );
            t += 5.0;
        }
    }
}

#[test]
fn delta_is_zero_at_reference_and_negative_when_warmer() {
    let reference = calculate_density(15.0, GasType::Propane, 60);
    let at_reference = density_delta(reference.density_kg_per_l, GasType::Propane, 60);
    assert!(at_reference.abs() < 1e-12);

    let warmer = calculate_density(35.0, GasType::Propane, 60);
    let delta = density_delta(warmer.density_kg_per_l, GasType::Propane, 60);
    assert!(delta < 0.0, "warmer LPG must be less dense, delta={delta}");
}

#[test]
fn temperature_formatting_carries_sign() {
    assert_eq!(format_temperature(15.0), "+15.0°C");
    assert_eq!(format_temperature(-10.25), "-10.2°C");
    assert_eq!(format_temperature(0.0), "0.0°C");
}
