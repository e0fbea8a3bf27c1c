use serde::{Deserialize, Serialize};

use crate::lpg::properties::GasType;
use crate::units::DensityUnit;

/// 히스토리 최대 길이. 초과분은 삽입 순서 기준으로 오래된 것부터 제거한다.
pub const MAX_MEASUREMENTS: usize = 50;

/// 저장되는 측정 스냅샷. 생성 후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    /// 고유 식별자 (UUID v4)
    pub id: String,
    /// 측정 시점 온도 [°C]
    pub temperature: f64,
    /// 측정 시점 밀도 [kg/L]
    pub density: f64,
    pub gas_type: GasType,
    /// epoch milliseconds
    pub timestamp: i64,
}

/// 대시보드 전체의 지속 상태. 단일 JSON 블롭으로 저장된다.
///
/// 필드명은 기존 저장 블롭과의 호환을 위해 camelCase로 직렬화하며,
/// 누락된 필드는 필드별 기본값으로 채워 읽는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    pub current_temperature: f64,
    pub gas_type: GasType,
    /// 혼합 가스일 때 프로판 비율 [0, 100]
    pub mixture_propane_percent: u8,
    pub density_unit: DensityUnit,
    /// 최신 기록이 맨 앞. 길이는 MAX_MEASUREMENTS 이하.
    pub measurements: Vec<MeasurementRecord>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            current_temperature: 15.0,
            gas_type: GasType::Propane,
            mixture_propane_percent: 60,
            density_unit: DensityUnit::KgPerLiter,
            measurements: Vec::new(),
        }
    }
}
