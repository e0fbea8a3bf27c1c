use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DASHBOARD: &str = "main_menu.dashboard";
    pub const MAIN_MENU_TEMPERATURE: &str = "main_menu.temperature";
    pub const MAIN_MENU_GAS_TYPE: &str = "main_menu.gas_type";
    pub const MAIN_MENU_MIXTURE: &str = "main_menu.mixture";
    pub const MAIN_MENU_UNIT: &str = "main_menu.unit";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_CHART: &str = "main_menu.chart";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const DASHBOARD_HEADING: &str = "dashboard.heading";
    pub const DASHBOARD_GAS: &str = "dashboard.gas";
    pub const DASHBOARD_TEMPERATURE: &str = "dashboard.temperature";
    pub const DASHBOARD_DENSITY: &str = "dashboard.density";
    pub const DASHBOARD_DELTA: &str = "dashboard.delta";
    pub const DASHBOARD_MIXTURE: &str = "dashboard.mixture";

    pub const TEMPERATURE_HEADING: &str = "temperature.heading";
    pub const TEMPERATURE_NOTE_RANGE: &str = "temperature.note_range";
    pub const PROMPT_TEMPERATURE_VALUE: &str = "prompt.temperature_value";
    pub const TEMPERATURE_SET: &str = "temperature.set";

    pub const GAS_TYPE_HEADING: &str = "gas_type.heading";
    pub const GAS_TYPE_OPTIONS: &str = "gas_type.options";
    pub const GAS_TYPE_SET: &str = "gas_type.set";

    pub const MIXTURE_HEADING: &str = "mixture.heading";
    pub const MIXTURE_NOTE_CLAMP: &str = "mixture.note_clamp";
    pub const PROMPT_MIXTURE_PERCENT: &str = "prompt.mixture_percent";
    pub const MIXTURE_SET: &str = "mixture.set";

    pub const UNIT_HEADING: &str = "unit.heading";
    pub const UNIT_OPTIONS: &str = "unit.options";
    pub const UNIT_SET: &str = "unit.set";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_OPTIONS: &str = "history.options";
    pub const HISTORY_ADDED: &str = "history.added";
    pub const PROMPT_REMOVE_INDEX: &str = "prompt.remove_index";
    pub const HISTORY_REMOVED: &str = "history.removed";
    pub const HISTORY_NOT_FOUND: &str = "history.not_found";
    pub const HISTORY_CLEARED: &str = "history.cleared";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const PROMPT_SAMPLE_COUNT: &str = "prompt.sample_count";
    pub const CHART_HEADER_ROW: &str = "chart.header_row";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/시스템 로케일 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str) -> String {
    normalize_lang(cli_arg)
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== LPG Density Dashboard ===",
        MAIN_MENU_DASHBOARD => "1) 현재 밀도 보기",
        MAIN_MENU_TEMPERATURE => "2) 온도 설정",
        MAIN_MENU_GAS_TYPE => "3) 가스 종류 선택",
        MAIN_MENU_MIXTURE => "4) 혼합비 설정",
        MAIN_MENU_UNIT => "5) 밀도 단위 선택",
        MAIN_MENU_HISTORY => "6) 측정 기록",
        MAIN_MENU_CHART => "7) 밀도-온도 차트",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        DASHBOARD_HEADING => "\n-- 현재 밀도 --",
        DASHBOARD_GAS => "가스:",
        DASHBOARD_TEMPERATURE => "온도:",
        DASHBOARD_DENSITY => "밀도:",
        DASHBOARD_DELTA => "15°C 대비:",
        DASHBOARD_MIXTURE => "프로판 비율:",
        TEMPERATURE_HEADING => "\n-- 온도 설정 --",
        TEMPERATURE_NOTE_RANGE => "참고: 유효 범위(-50~+50°C) 밖의 값은 계산 시 경계값으로 보정됩니다.",
        PROMPT_TEMPERATURE_VALUE => "온도 [°C]: ",
        TEMPERATURE_SET => "온도가 설정되었습니다:",
        GAS_TYPE_HEADING => "\n-- 가스 종류 --",
        GAS_TYPE_OPTIONS => "1) 프로판  2) 부탄  3) 혼합",
        GAS_TYPE_SET => "가스 종류가 설정되었습니다:",
        MIXTURE_HEADING => "\n-- 혼합비 설정 --",
        MIXTURE_NOTE_CLAMP => "참고: 0~100 범위 밖의 값은 경계값으로 보정됩니다.",
        PROMPT_MIXTURE_PERCENT => "프로판 비율 [%]: ",
        MIXTURE_SET => "혼합비가 설정되었습니다:",
        UNIT_HEADING => "\n-- 밀도 단위 --",
        UNIT_OPTIONS => "1) kg/L  2) g/cm³  3) kg/m³  4) lb/gal",
        UNIT_SET => "밀도 단위가 설정되었습니다:",
        HISTORY_HEADING => "\n-- 측정 기록 --",
        HISTORY_EMPTY => "저장된 측정 기록이 없습니다.",
        HISTORY_OPTIONS => "1) 현재 상태 기록 추가  2) 기록 삭제  3) 전체 삭제  0) 돌아가기",
        HISTORY_ADDED => "측정 기록이 추가되었습니다:",
        PROMPT_REMOVE_INDEX => "삭제할 기록 번호: ",
        HISTORY_REMOVED => "기록이 삭제되었습니다.",
        HISTORY_NOT_FOUND => "해당 번호의 기록이 없습니다.",
        HISTORY_CLEARED => "측정 기록을 모두 삭제했습니다.",
        CHART_HEADING => "\n-- 밀도-온도 차트 --",
        PROMPT_SAMPLE_COUNT => "샘플 수 (최소 2, 기본 11): ",
        CHART_HEADER_ROW => "  온도        밀도",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== LPG Density Dashboard ===",
        MAIN_MENU_DASHBOARD => "1) Current density",
        MAIN_MENU_TEMPERATURE => "2) Set temperature",
        MAIN_MENU_GAS_TYPE => "3) Select gas type",
        MAIN_MENU_MIXTURE => "4) Set mixture ratio",
        MAIN_MENU_UNIT => "5) Select density unit",
        MAIN_MENU_HISTORY => "6) Measurement history",
        MAIN_MENU_CHART => "7) Density-temperature chart",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        DASHBOARD_HEADING => "\n-- Current Density --",
        DASHBOARD_GAS => "Gas:",
        DASHBOARD_TEMPERATURE => "Temperature:",
        DASHBOARD_DENSITY => "Density:",
        DASHBOARD_DELTA => "vs. 15°C:",
        DASHBOARD_MIXTURE => "Propane fraction:",
        TEMPERATURE_HEADING => "\n-- Set Temperature --",
        TEMPERATURE_NOTE_RANGE => "Note: values outside the valid range (-50 to +50°C) are clamped for calculation.",
        PROMPT_TEMPERATURE_VALUE => "Temperature [°C]: ",
        TEMPERATURE_SET => "Temperature set:",
        GAS_TYPE_HEADING => "\n-- Gas Type --",
        GAS_TYPE_OPTIONS => "1) Propane  2) Butane  3) Mixed",
        GAS_TYPE_SET => "Gas type set:",
        MIXTURE_HEADING => "\n-- Mixture Ratio --",
        MIXTURE_NOTE_CLAMP => "Note: values outside 0-100 are clamped.",
        PROMPT_MIXTURE_PERCENT => "Propane fraction [%]: ",
        MIXTURE_SET => "Mixture ratio set:",
        UNIT_HEADING => "\n-- Density Unit --",
        UNIT_OPTIONS => "1) kg/L  2) g/cm³  3) kg/m³  4) lb/gal",
        UNIT_SET => "Density unit set:",
        HISTORY_HEADING => "\n-- Measurement History --",
        HISTORY_EMPTY => "No stored measurements.",
        HISTORY_OPTIONS => "1) Add snapshot  2) Remove entry  3) Clear all  0) Back",
        HISTORY_ADDED => "Measurement added:",
        PROMPT_REMOVE_INDEX => "Entry number to remove: ",
        HISTORY_REMOVED => "Entry removed.",
        HISTORY_NOT_FOUND => "No entry with that number.",
        HISTORY_CLEARED => "All measurements cleared.",
        CHART_HEADING => "\n-- Density-Temperature Chart --",
        PROMPT_SAMPLE_COUNT => "Sample count (min 2, default 11): ",
        CHART_HEADER_ROW => "  Temp        Density",
        _ => return None,
    })
}
