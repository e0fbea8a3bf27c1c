use crate::i18n::{keys, Translator};
use crate::store::{Dashboard, StateStorage};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 저장소 오류는 store 계층에서 로그만 남기고 흡수하므로 여기에는
/// 포함되지 않는다.
#[derive(Debug)]
pub enum AppError {
    /// 표준 입출력 오류
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 상태 저장은 각 변경 연산이 직접 수행하므로 종료 시 별도 저장은 없다.
pub fn run<S: StateStorage>(dash: &mut Dashboard<S>, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Dashboard => ui_cli::show_dashboard(tr, dash),
            MenuChoice::Temperature => ui_cli::handle_temperature(tr, dash)?,
            MenuChoice::GasTypeSelect => ui_cli::handle_gas_type(tr, dash)?,
            MenuChoice::Mixture => ui_cli::handle_mixture(tr, dash)?,
            MenuChoice::Unit => ui_cli::handle_unit(tr, dash)?,
            MenuChoice::History => ui_cli::handle_history(tr, dash)?,
            MenuChoice::Chart => ui_cli::handle_chart(tr, dash)?,
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
