//! LPG 밀도 모델 관련 모듈 모음.

pub mod chart;
pub mod density;
pub mod properties;

pub use chart::{generate_series, ChartPoint};
pub use density::{calculate_density, density_delta, format_temperature, DensityCalculation};
pub use properties::{gas_properties, mixture_properties, GasProperties, GasType};
