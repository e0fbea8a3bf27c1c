use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::lpg::properties::{self, GasType, REFERENCE_TEMP_C};

/// 액상 LPG 밀도의 물리적 안전 하한 [kg/L].
const DENSITY_MIN_KG_PER_L: f64 = 0.45;
/// 액상 LPG 밀도의 물리적 안전 상한 [kg/L].
const DENSITY_MAX_KG_PER_L: f64 = 0.65;

/// 한 번의 밀도 계산 결과. 개별 저장되지 않는 일시적 값이다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DensityCalculation {
    /// 유효 범위로 클램프된 온도 [°C]
    pub temperature_c: f64,
    /// 계산된 밀도 [kg/L], 소수 4자리 반올림
    pub density_kg_per_l: f64,
    pub gas_type: GasType,
    /// epoch milliseconds
    pub timestamp_ms: i64,
}

/// 선형 근사식 ρ(T) = ρ₀ + k·(T − 15) 로 액상 밀도를 계산한다.
///
/// 온도는 가스별 유효 범위로, 결과는 안전 범위 [0.45, 0.65] kg/L로
/// 클램프한다. 입력 검증 오류는 없으며 범위 밖 값은 조용히 보정한다.
pub fn calculate_density(
    temperature_c: f64,
    gas: GasType,
    propane_percent: u8,
) -> DensityCalculation {
    let props = properties::gas_properties(gas);
    let (density_at_15c, thermal_coeff) = match gas {
        GasType::Mixed => {
            let mix = properties::mixture_properties(propane_percent);
            (mix.density_at_15c, mix.thermal_expansion_coefficient)
        }
        _ => (props.density_at_15c, props.thermal_expansion_coefficient),
    };

    let clamped_temp = temperature_c.clamp(props.min_temp_c, props.max_temp_c);
    // 계수가 음수이므로 온도가 오르면 밀도가 내려간다.
    let density = density_at_15c + thermal_coeff * (clamped_temp - REFERENCE_TEMP_C);
    let banded = density.clamp(DENSITY_MIN_KG_PER_L, DENSITY_MAX_KG_PER_L);

    DensityCalculation {
        temperature_c: clamped_temp,
        density_kg_per_l: round4(banded),
        gas_type: gas,
        timestamp_ms: Utc::now().timestamp_millis(),
    }
}

/// 기준 온도(15°C) 계산값 대비 밀도 차이를 구한다.
pub fn density_delta(current_density_kg_per_l: f64, gas: GasType, propane_percent: u8) -> f64 {
    let reference = calculate_density(REFERENCE_TEMP_C, gas, propane_percent);
    current_density_kg_per_l - reference.density_kg_per_l
}

/// 온도를 부호와 함께 표시용 문자열로 만든다. (ex: +15.0°C)
pub fn format_temperature(temperature_c: f64) -> String {
    if temperature_c > 0.0 {
        format!("+{temperature_c:.1}°C")
    } else {
        format!("{temperature_c:.1}°C")
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
