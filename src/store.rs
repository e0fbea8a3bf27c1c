use std::fs;
use std::path::PathBuf;

use tracing::warn;
use uuid::Uuid;

use crate::lpg::density::{self, DensityCalculation};
use crate::lpg::properties::GasType;
use crate::state::{DashboardState, MeasurementRecord, MAX_MEASUREMENTS};
use crate::units::DensityUnit;

/// 상태 저장소 접근 시 발생 가능한 오류.
#[derive(Debug)]
pub enum StorageError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Serde(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            StorageError::Serde(e) => write!(f, "상태 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        StorageError::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        StorageError::Serde(value)
    }
}

/// 직렬화된 상태 블롭 하나를 읽고 쓰는 키-값 저장소 인터페이스.
///
/// 테스트에서는 인메모리 구현으로 대체할 수 있다.
pub trait StateStorage {
    /// 저장된 블롭을 읽는다. 없거나 읽을 수 없으면 None.
    fn read(&self) -> Option<String>;
    /// 블롭 전체를 교체 저장한다.
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;
}

/// 단일 파일을 고정 키로 사용하는 저장소.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStorage for FileStorage {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// 테스트용 인메모리 저장소. 쓰기 횟수를 함께 기록한다.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
    pub write_count: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 채워진 블롭으로 저장소를 만든다.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Some(payload.to_string()),
            write_count: 0,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.clone()
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        self.slot = Some(payload.to_string());
        self.write_count += 1;
        Ok(())
    }
}

/// 상태 블롭의 로드/저장을 담당하는 리포지토리.
#[derive(Debug)]
pub struct StateRepository<S: StateStorage> {
    storage: S,
}

impl<S: StateStorage> StateRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 저장된 상태를 읽는다. 블롭이 없거나 손상되었으면 기본 상태로
    /// 폴백하고, 누락된 필드는 serde 기본값으로 채운다.
    pub fn load_or_default(&self) -> DashboardState {
        match self.storage.read() {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(state) => state,
                Err(err) => {
                    warn!("상태 블롭 파싱 실패, 기본값으로 폴백: {err}");
                    DashboardState::default()
                }
            },
            None => DashboardState::default(),
        }
    }

    /// 전체 상태를 교체 저장한다. 실패는 로그만 남기고 전파하지 않는다.
    pub fn save(&mut self, state: &DashboardState) {
        if let Err(err) = self.try_save(state) {
            warn!("상태 저장 실패: {err}");
        }
    }

    fn try_save(&mut self, state: &DashboardState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)?;
        self.storage.write(&payload)
    }
}

/// 대시보드 상태의 단일 소유자.
///
/// 모든 변경 연산은 수행 직후 전체 상태를 저장한다(증분 저장 없음).
#[derive(Debug)]
pub struct Dashboard<S: StateStorage> {
    state: DashboardState,
    repository: StateRepository<S>,
}

impl<S: StateStorage> Dashboard<S> {
    /// 저장소에서 상태를 로드해 대시보드를 만든다.
    pub fn load(storage: S) -> Self {
        let repository = StateRepository::new(storage);
        let state = repository.load_or_default();
        Self { state, repository }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    pub fn temperature_c(&self) -> f64 {
        self.state.current_temperature
    }

    pub fn gas_type(&self) -> GasType {
        self.state.gas_type
    }

    pub fn mixture_propane_percent(&self) -> u8 {
        self.state.mixture_propane_percent
    }

    pub fn density_unit(&self) -> DensityUnit {
        self.state.density_unit
    }

    pub fn measurements(&self) -> &[MeasurementRecord] {
        &self.state.measurements
    }

    /// 현재 상태 기준으로 밀도를 다시 계산한다.
    pub fn current_density(&self) -> DensityCalculation {
        density::calculate_density(
            self.state.current_temperature,
            self.state.gas_type,
            self.state.mixture_propane_percent,
        )
    }

    pub fn set_temperature(&mut self, temperature_c: f64) {
        self.state.current_temperature = temperature_c;
        self.persist();
    }

    pub fn set_gas_type(&mut self, gas: GasType) {
        self.state.gas_type = gas;
        self.persist();
    }

    /// 혼합비를 [0, 100]으로 클램프해 설정한다.
    pub fn set_mixture_propane_percent(&mut self, percent: i32) {
        self.state.mixture_propane_percent = percent.clamp(0, 100) as u8;
        self.persist();
    }

    pub fn set_density_unit(&mut self, unit: DensityUnit) {
        self.state.density_unit = unit;
        self.persist();
    }

    /// 현재 상태로 측정 스냅샷을 만들어 맨 앞에 추가한다.
    /// 길이가 상한을 넘으면 삽입 순서 기준으로 오래된 기록을 잘라낸다.
    pub fn add_measurement(&mut self) -> &MeasurementRecord {
        let calc = self.current_density();
        let record = MeasurementRecord {
            id: Uuid::new_v4().to_string(),
            temperature: calc.temperature_c,
            density: calc.density_kg_per_l,
            gas_type: calc.gas_type,
            timestamp: calc.timestamp_ms,
        };
        self.state.measurements.insert(0, record);
        self.state.measurements.truncate(MAX_MEASUREMENTS);
        self.persist();
        &self.state.measurements[0]
    }

    /// id가 일치하는 기록을 삭제한다. 없으면 목록은 그대로다.
    pub fn remove_measurement(&mut self, id: &str) {
        self.state.measurements.retain(|m| m.id != id);
        self.persist();
    }

    /// 측정 기록을 모두 비운다.
    pub fn clear_measurements(&mut self) {
        self.state.measurements.clear();
        self.persist();
    }

    fn persist(&mut self) {
        self.repository.save(&self.state);
    }
}
