use crate::lpg::density::calculate_density;
use crate::lpg::properties::{self, GasType};

/// 밀도-온도 차트의 한 샘플 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub temperature_c: f64,
    pub density_kg_per_l: f64,
}

/// 유효 온도 범위를 균등 분할한 (온도, 밀도) 시계열을 생성한다.
///
/// 양 끝점을 포함하며 간격은 range/(n−1)이다. sample_count는 최소 2로
/// 보정한다. 각 점은 밀도 계산기를 그대로 사용하므로 클램프/안전 범위
/// 규칙이 동일하게 적용된다. 고정 입력에 대해 결정적이다.
pub fn generate_series(gas: GasType, propane_percent: u8, sample_count: usize) -> Vec<ChartPoint> {
    let props = properties::gas_properties(gas);
    let count = sample_count.max(2);
    let step = (props.max_temp_c - props.min_temp_c) / (count - 1) as f64;

    (0..count)
        .map(|i| {
            let temperature_c = props.min_temp_c + step * i as f64;
            let calc = calculate_density(temperature_c, gas, propane_percent);
            ChartPoint {
                temperature_c,
                density_kg_per_l: calc.density_kg_per_l,
            }
        })
        .collect()
}
