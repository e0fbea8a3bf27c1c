//! 단위 정의 및 변환 모듈 모음.

pub mod density;

pub use density::{
    convert_density, format_density, from_kg_per_liter, parse_density_unit, to_kg_per_liter,
    DensityUnit, UnitError,
};
