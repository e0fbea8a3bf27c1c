use serde::{Deserialize, Serialize};

/// 밀도 단위를 정의한다.
///
/// 직렬화 표기는 저장 블롭 호환성을 위해 표시 기호와 동일하게 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    #[serde(rename = "kg/L")]
    KgPerLiter,
    #[serde(rename = "g/cm³")]
    GramPerCubicCentimeter,
    #[serde(rename = "kg/m³")]
    KgPerCubicMeter,
    #[serde(rename = "lb/gal")]
    PoundPerGallon,
}

// 1 lb/gal ≈ 0.1198264 kg/L
const KG_PER_L_PER_LB_PER_GAL: f64 = 0.1198264;

impl DensityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DensityUnit::KgPerLiter => "kg/L",
            DensityUnit::GramPerCubicCentimeter => "g/cm³",
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::PoundPerGallon => "lb/gal",
        }
    }
}

/// 주어진 값을 기준 단위(kg/L)로 변환한다. g/cm³는 kg/L와 1:1이다.
pub fn to_kg_per_liter(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerLiter | DensityUnit::GramPerCubicCentimeter => value,
        DensityUnit::KgPerCubicMeter => value / 1000.0,
        DensityUnit::PoundPerGallon => value * KG_PER_L_PER_LB_PER_GAL,
    }
}

/// kg/L 값을 원하는 단위로 변환한다.
pub fn from_kg_per_liter(value_kg_per_l: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerLiter | DensityUnit::GramPerCubicCentimeter => value_kg_per_l,
        DensityUnit::KgPerCubicMeter => value_kg_per_l * 1000.0,
        DensityUnit::PoundPerGallon => value_kg_per_l / KG_PER_L_PER_LB_PER_GAL,
    }
}

/// 밀도를 서로 다른 단위로 변환한다. 항상 kg/L를 경유하는 2단계 변환이다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_kg_per_liter(value, from);
    from_kg_per_liter(base, to)
}

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum UnitError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for UnitError {}

/// 문자열로 전달된 단위명을 enum으로 변환한다.
pub fn parse_density_unit(s: &str) -> Result<DensityUnit, UnitError> {
    match s.trim().to_lowercase().as_str() {
        "kg/l" => Ok(DensityUnit::KgPerLiter),
        "g/cm3" | "g/cm^3" | "g/cm³" => Ok(DensityUnit::GramPerCubicCentimeter),
        "kg/m3" | "kg/m^3" | "kg/m³" => Ok(DensityUnit::KgPerCubicMeter),
        "lb/gal" => Ok(DensityUnit::PoundPerGallon),
        _ => Err(UnitError::UnknownUnit(s.to_string())),
    }
}

/// kg/L 값을 지정 단위로 환산해 표시용 문자열로 만든다.
///
/// 단위별 소수 자릿수: kg/L·g/cm³ 3자리, kg/m³ 1자리, lb/gal 2자리.
pub fn format_density(value_kg_per_l: f64, unit: DensityUnit) -> String {
    let converted = from_kg_per_liter(value_kg_per_l, unit);
    match unit {
        DensityUnit::KgPerLiter | DensityUnit::GramPerCubicCentimeter => {
            format!("{converted:.3}")
        }
        DensityUnit::KgPerCubicMeter => format!("{converted:.1}"),
        DensityUnit::PoundPerGallon => format!("{converted:.2}"),
    }
}
