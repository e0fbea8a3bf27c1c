//! LPG(프로판/부탄) 액상 밀도 계산과 측정 기록 관리를 라이브러리로 분리하여
//! CLI 뿐 아니라 추후 다른 프런트엔드에서도 재사용할 수 있게 한다.

pub mod app;
pub mod i18n;
pub mod lpg;
pub mod state;
pub mod store;
pub mod ui_cli;
pub mod units;
