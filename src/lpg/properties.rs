use serde::{Deserialize, Serialize};

/// 다루는 가스 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasType {
    Propane,
    Butane,
    Mixed,
}

/// 액화석유가스(LPG)의 물성 상수.
///
/// 기준 밀도와 열팽창 계수는 Engineering Toolbox 자료 기반의
/// 선형 근사 모델 보정값이다.
#[derive(Debug, Clone, Copy)]
pub struct GasProperties {
    pub name: &'static str,
    /// 15°C 기준 밀도 [kg/L]
    pub density_at_15c: f64,
    /// 선형 열팽창 계수 [kg/L/°C]. 음수(온도 상승 시 밀도 감소).
    pub thermal_expansion_coefficient: f64,
    /// 유효 온도 하한 [°C]
    pub min_temp_c: f64,
    /// 유효 온도 상한 [°C]
    pub max_temp_c: f64,
}

/// 모델의 보정 기준 온도 [°C].
pub const REFERENCE_TEMP_C: f64 = 15.0;

const PROPANE: GasProperties = GasProperties {
    name: "프로판 (C₃H₈)",
    density_at_15c: 0.508,
    thermal_expansion_coefficient: -0.00107,
    min_temp_c: -50.0,
    max_temp_c: 50.0,
};

const BUTANE: GasProperties = GasProperties {
    name: "부탄 (C₄H₁₀)",
    density_at_15c: 0.573,
    thermal_expansion_coefficient: -0.00104,
    min_temp_c: -50.0,
    max_temp_c: 50.0,
};

// 혼합 가스 항목의 밀도/계수는 공칭값이다. 실제 값은 혼합비에 따라
// mixture_properties()로 재계산한다.
const MIXED: GasProperties = GasProperties {
    name: "혼합 (C₃H₈/C₄H₁₀)",
    density_at_15c: 0.535,
    thermal_expansion_coefficient: -0.001055,
    min_temp_c: -50.0,
    max_temp_c: 50.0,
};

/// 가스 종류별 물성 테이블 조회.
pub fn gas_properties(gas: GasType) -> &'static GasProperties {
    match gas {
        GasType::Propane => &PROPANE,
        GasType::Butane => &BUTANE,
        GasType::Mixed => &MIXED,
    }
}

/// 혼합비로 재계산한 기준 밀도/열팽창 계수.
#[derive(Debug, Clone, Copy)]
pub struct MixtureProperties {
    pub density_at_15c: f64,
    pub thermal_expansion_coefficient: f64,
}

/// 프로판 비율(부피 %)에 따라 혼합 가스 물성을 선형 블렌드로 구한다.
/// 비율은 [0, 100]으로 클램프한다.
pub fn mixture_properties(propane_percent: u8) -> MixtureProperties {
    let propane_fraction = f64::from(propane_percent.min(100)) / 100.0;
    let butane_fraction = 1.0 - propane_fraction;

    MixtureProperties {
        density_at_15c: PROPANE.density_at_15c * propane_fraction
            + BUTANE.density_at_15c * butane_fraction,
        thermal_expansion_coefficient: PROPANE.thermal_expansion_coefficient * propane_fraction
            + BUTANE.thermal_expansion_coefficient * butane_fraction,
    }
}
