//! 밀도 단위 변환 및 표시 자릿수 테스트.
use lpg_density_dashboard::units::{
    convert_density, format_density, parse_density_unit, DensityUnit, UnitError,
};

const ALL_UNITS: [DensityUnit; 4] = [
    DensityUnit::KgPerLiter,
    DensityUnit::GramPerCubicCentimeter,
    DensityUnit::KgPerCubicMeter,
    DensityUnit::PoundPerGallon,
];

#[test]
fn round_trip_through_every_unit() {
    let value = 0.508;
    for unit in ALL_UNITS {
        let there = convert_density(value, DensityUnit::KgPerLiter, unit);
        let back = convert_density(there, unit, DensityUnit::KgPerLiter);
        assert!(
            (back - value).abs() < 1e-9,
            "{unit:?}: round trip gave {back}"
        );
    }
}

#[test]
fn gram_per_cubic_centimeter_is_identity() {
    let converted = convert_density(
        0.573,
        DensityUnit::KgPerLiter,
        DensityUnit::GramPerCubicCentimeter,
    );
    assert!((converted - 0.573).abs() < 1e-12);
}

#[test]
fn kg_per_cubic_meter_scales_by_thousand() {
    let converted = convert_density(0.508, DensityUnit::KgPerLiter, DensityUnit::KgPerCubicMeter);
    assert!((converted - 508.0).abs() < 1e-9);
}

#[test]
fn pound_per_gallon_uses_fixed_factor() {
    // 1 kg/L ≈ 8.3454 lb/gal (1 lb/gal = 0.1198264 kg/L)
    let converted = convert_density(1.0, DensityUnit::KgPerLiter, DensityUnit::PoundPerGallon);
    assert!((converted - 1.0 / 0.1198264).abs() < 1e-9);
}

#[test]
fn display_precision_varies_by_unit() {
    assert_eq!(format_density(0.508, DensityUnit::KgPerLiter), "0.508");
    assert_eq!(
        format_density(0.508, DensityUnit::GramPerCubicCentimeter),
        "0.508"
    );
    assert_eq!(format_density(0.508, DensityUnit::KgPerCubicMeter), "508.0");
    assert_eq!(format_density(0.508, DensityUnit::PoundPerGallon), "4.24");
}

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!(
        parse_density_unit("kg/L").unwrap(),
        DensityUnit::KgPerLiter
    );
    assert_eq!(
        parse_density_unit("g/cm3").unwrap(),
        DensityUnit::GramPerCubicCentimeter
    );
    assert_eq!(
        parse_density_unit("g/cm³").unwrap(),
        DensityUnit::GramPerCubicCentimeter
    );
    assert_eq!(
        parse_density_unit("KG/M3").unwrap(),
        DensityUnit::KgPerCubicMeter
    );
    assert_eq!(
        parse_density_unit(" lb/gal ").unwrap(),
        DensityUnit::PoundPerGallon
    );
}

#[test]
fn parse_rejects_unknown_unit() {
    match parse_density_unit("oz/ft3") {
        Err(UnitError::UnknownUnit(s)) => assert_eq!(s, "oz/ft3"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}
