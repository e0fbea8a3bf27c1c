use std::io::{self, Write};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::lpg::chart;
use crate::lpg::density;
use crate::lpg::properties::{self, GasType};
use crate::store::{Dashboard, StateStorage};
use crate::units::{self, DensityUnit};

/// 차트 메뉴의 기본 샘플 수.
const DEFAULT_CHART_SAMPLES: usize = 11;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Dashboard,
    Temperature,
    GasTypeSelect,
    Mixture,
    Unit,
    History,
    Chart,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_DASHBOARD));
    println!("{}", tr.t(keys::MAIN_MENU_TEMPERATURE));
    println!("{}", tr.t(keys::MAIN_MENU_GAS_TYPE));
    println!("{}", tr.t(keys::MAIN_MENU_MIXTURE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_CHART));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Dashboard),
            "2" => return Ok(MenuChoice::Temperature),
            "3" => return Ok(MenuChoice::GasTypeSelect),
            "4" => return Ok(MenuChoice::Mixture),
            "5" => return Ok(MenuChoice::Unit),
            "6" => return Ok(MenuChoice::History),
            "7" => return Ok(MenuChoice::Chart),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 현재 상태 기준 밀도를 표시한다.
pub fn show_dashboard<S: StateStorage>(tr: &Translator, dash: &Dashboard<S>) {
    println!("{}", tr.t(keys::DASHBOARD_HEADING));
    let calc = dash.current_density();
    let unit = dash.density_unit();
    let props = properties::gas_properties(dash.gas_type());

    println!("{} {}", tr.t(keys::DASHBOARD_GAS), props.name);
    if dash.gas_type() == GasType::Mixed {
        println!(
            "{} {}%",
            tr.t(keys::DASHBOARD_MIXTURE),
            dash.mixture_propane_percent()
        );
    }
    println!(
        "{} {}",
        tr.t(keys::DASHBOARD_TEMPERATURE),
        density::format_temperature(calc.temperature_c)
    );
    println!(
        "{} {} {}",
        tr.t(keys::DASHBOARD_DENSITY),
        units::format_density(calc.density_kg_per_l, unit),
        unit.symbol()
    );
    let delta = density::density_delta(
        calc.density_kg_per_l,
        dash.gas_type(),
        dash.mixture_propane_percent(),
    );
    println!("{} {delta:+.4} kg/L", tr.t(keys::DASHBOARD_DELTA));
}

/// 온도 설정 메뉴를 처리한다.
pub fn handle_temperature<S: StateStorage>(
    tr: &Translator,
    dash: &mut Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_HEADING));
    println!("{}", tr.t(keys::TEMPERATURE_NOTE_RANGE));
    let value = read_f64(tr, tr.t(keys::PROMPT_TEMPERATURE_VALUE))?;
    dash.set_temperature(value);
    println!(
        "{} {}",
        tr.t(keys::TEMPERATURE_SET),
        density::format_temperature(value)
    );
    show_dashboard(tr, dash);
    Ok(())
}

/// 가스 종류 선택 메뉴를 처리한다.
pub fn handle_gas_type<S: StateStorage>(
    tr: &Translator,
    dash: &mut Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GAS_TYPE_HEADING));
    println!("{}", tr.t(keys::GAS_TYPE_OPTIONS));
    let gas = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => break GasType::Propane,
            "2" => break GasType::Butane,
            "3" => break GasType::Mixed,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    dash.set_gas_type(gas);
    println!(
        "{} {}",
        tr.t(keys::GAS_TYPE_SET),
        properties::gas_properties(gas).name
    );
    show_dashboard(tr, dash);
    Ok(())
}

/// 혼합비 설정 메뉴를 처리한다.
pub fn handle_mixture<S: StateStorage>(
    tr: &Translator,
    dash: &mut Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MIXTURE_HEADING));
    println!("{}", tr.t(keys::MIXTURE_NOTE_CLAMP));
    let percent = read_i32(tr, tr.t(keys::PROMPT_MIXTURE_PERCENT))?;
    dash.set_mixture_propane_percent(percent);
    println!(
        "{} {}%",
        tr.t(keys::MIXTURE_SET),
        dash.mixture_propane_percent()
    );
    show_dashboard(tr, dash);
    Ok(())
}

/// 밀도 단위 선택 메뉴를 처리한다.
pub fn handle_unit<S: StateStorage>(
    tr: &Translator,
    dash: &mut Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_HEADING));
    println!("{}", tr.t(keys::UNIT_OPTIONS));
    let unit = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => break DensityUnit::KgPerLiter,
            "2" => break DensityUnit::GramPerCubicCentimeter,
            "3" => break DensityUnit::KgPerCubicMeter,
            "4" => break DensityUnit::PoundPerGallon,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    dash.set_density_unit(unit);
    println!("{} {}", tr.t(keys::UNIT_SET), unit.symbol());
    show_dashboard(tr, dash);
    Ok(())
}

/// 측정 기록 메뉴를 처리한다. 목록 표시 후 한 가지 동작을 수행한다.
pub fn handle_history<S: StateStorage>(
    tr: &Translator,
    dash: &mut Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    print_measurements(tr, dash);
    println!("{}", tr.t(keys::HISTORY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let unit = dash.density_unit();
            let record = dash.add_measurement();
            println!(
                "{} {}  {} {}",
                tr.t(keys::HISTORY_ADDED),
                density::format_temperature(record.temperature),
                units::format_density(record.density, unit),
                unit.symbol()
            );
        }
        "2" => {
            let index = read_i32(tr, tr.t(keys::PROMPT_REMOVE_INDEX))?;
            let id = usize::try_from(index)
                .ok()
                .filter(|n| *n >= 1)
                .and_then(|n| dash.measurements().get(n - 1))
                .map(|m| m.id.clone());
            match id {
                Some(id) => {
                    dash.remove_measurement(&id);
                    println!("{}", tr.t(keys::HISTORY_REMOVED));
                }
                None => println!("{}", tr.t(keys::HISTORY_NOT_FOUND)),
            }
        }
        "3" => {
            dash.clear_measurements();
            println!("{}", tr.t(keys::HISTORY_CLEARED));
        }
        _ => {}
    }
    Ok(())
}

fn print_measurements<S: StateStorage>(tr: &Translator, dash: &Dashboard<S>) {
    if dash.measurements().is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    let unit = dash.density_unit();
    for (i, m) in dash.measurements().iter().enumerate() {
        let when = chrono::DateTime::from_timestamp_millis(m.timestamp)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| m.timestamp.to_string());
        println!(
            "{:>3}) {}  {}  {}  {} {}",
            i + 1,
            when,
            properties::gas_properties(m.gas_type).name,
            density::format_temperature(m.temperature),
            units::format_density(m.density, unit),
            unit.symbol()
        );
    }
}

/// 밀도-온도 차트를 표 형태로 출력한다.
pub fn handle_chart<S: StateStorage>(
    tr: &Translator,
    dash: &Dashboard<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CHART_HEADING));
    let input = read_line(tr.t(keys::PROMPT_SAMPLE_COUNT))?;
    let samples = input
        .trim()
        .parse::<usize>()
        .unwrap_or(DEFAULT_CHART_SAMPLES);

    let series = chart::generate_series(
        dash.gas_type(),
        dash.mixture_propane_percent(),
        samples,
    );
    let unit = dash.density_unit();
    println!("{}", tr.t(keys::CHART_HEADER_ROW));
    for point in &series {
        println!(
            "{:>8}  {:>10} {}",
            density::format_temperature(point.temperature_c),
            units::format_density(point.density_kg_per_l, unit),
            unit.symbol()
        );
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_i32(tr: &Translator, prompt: &str) -> Result<i32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<i32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
