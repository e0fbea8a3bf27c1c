//! 측정 기록 저장소와 상태 지속성 테스트.
use lpg_density_dashboard::lpg::properties::GasType;
use lpg_density_dashboard::state::MAX_MEASUREMENTS;
use lpg_density_dashboard::store::{Dashboard, MemoryStorage, StateStorage, StorageError};
use lpg_density_dashboard::units::DensityUnit;

/// 쓰기가 항상 실패하는 저장소. 저장 실패 경로 검증용.
struct FailingStorage;

impl StateStorage for FailingStorage {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&mut self, _payload: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "storage full",
        )))
    }
}

#[test]
fn load_from_empty_storage_falls_back_to_defaults() {
    let dash = Dashboard::load(MemoryStorage::new());
    assert!((dash.temperature_c() - 15.0).abs() < 1e-12);
    assert_eq!(dash.gas_type(), GasType::Propane);
    assert_eq!(dash.mixture_propane_percent(), 60);
    assert_eq!(dash.density_unit(), DensityUnit::KgPerLiter);
    assert!(dash.measurements().is_empty());
}

#[test]
fn load_from_corrupt_payload_falls_back_to_defaults() {
    let dash = Dashboard::load(MemoryStorage::with_payload("{ not json"));
    assert!((dash.temperature_c() - 15.0).abs() < 1e-12);
    assert_eq!(dash.gas_type(), GasType::Propane);
    assert!(dash.measurements().is_empty());
}

#[test]
fn load_with_missing_fields_defaults_field_by_field() {
    let dash = Dashboard::load(MemoryStorage::with_payload(r#"{"gasType":"butane"}"#));
    assert_eq!(dash.gas_type(), GasType::Butane);
    // 나머지 필드는 기본값으로 채워진다.
    assert!((dash.temperature_c() - 15.0).abs() < 1e-12);
    assert_eq!(dash.mixture_propane_percent(), 60);
    assert_eq!(dash.density_unit(), DensityUnit::KgPerLiter);
    assert!(dash.measurements().is_empty());
}

#[test]
fn history_bounded_at_50_with_fifo_eviction() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    for i in 0..60 {
        dash.set_temperature(f64::from(i) / 10.0);
        dash.add_measurement();
    }
    assert_eq!(dash.measurements().len(), MAX_MEASUREMENTS);
    // 최신이 맨 앞, 가장 오래된 10건(i=0..9)은 제거되어야 한다.
    assert!((dash.measurements()[0].temperature - 5.9).abs() < 1e-12);
    assert!((dash.measurements()[49].temperature - 1.0).abs() < 1e-12);
}

#[test]
fn measurement_ids_are_unique() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    for _ in 0..10 {
        dash.add_measurement();
    }
    let mut ids: Vec<_> = dash.measurements().iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn remove_by_id_deletes_match_and_ignores_absent() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    for _ in 0..3 {
        dash.add_measurement();
    }
    assert_eq!(dash.storage().write_count, 3);
    let target = dash.measurements()[1].id.clone();

    dash.remove_measurement(&target);
    assert_eq!(dash.measurements().len(), 2);
    assert!(dash.measurements().iter().all(|m| m.id != target));
    assert_eq!(dash.storage().write_count, 4);

    // 일치하는 id가 없어도 목록은 그대로, 전체 상태 저장은 수행된다.
    dash.remove_measurement("no-such-id");
    assert_eq!(dash.measurements().len(), 2);
    assert_eq!(dash.storage().write_count, 5);
}

#[test]
fn write_failure_is_swallowed_and_state_still_updates() {
    let mut dash = Dashboard::load(FailingStorage);

    // 저장 실패는 호출자에게 전파되지 않고 메모리 상태는 갱신된다.
    dash.set_temperature(-12.5);
    assert!((dash.temperature_c() + 12.5).abs() < 1e-12);

    dash.set_gas_type(GasType::Butane);
    assert_eq!(dash.gas_type(), GasType::Butane);

    dash.add_measurement();
    assert_eq!(dash.measurements().len(), 1);

    dash.clear_measurements();
    assert!(dash.measurements().is_empty());
}

#[test]
fn clear_empties_history() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    for _ in 0..5 {
        dash.add_measurement();
    }
    dash.clear_measurements();
    assert!(dash.measurements().is_empty());
}

#[test]
fn every_mutation_writes_full_state() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    assert_eq!(dash.storage().write_count, 0);

    dash.set_temperature(-12.0);
    assert_eq!(dash.storage().write_count, 1);
    dash.set_gas_type(GasType::Mixed);
    assert_eq!(dash.storage().write_count, 2);
    dash.set_mixture_propane_percent(70);
    assert_eq!(dash.storage().write_count, 3);
    dash.set_density_unit(DensityUnit::KgPerCubicMeter);
    assert_eq!(dash.storage().write_count, 4);
    dash.add_measurement();
    assert_eq!(dash.storage().write_count, 5);
    dash.clear_measurements();
    assert_eq!(dash.storage().write_count, 6);
}

#[test]
fn mixture_percent_is_clamped_on_set() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    dash.set_mixture_propane_percent(150);
    assert_eq!(dash.mixture_propane_percent(), 100);
    dash.set_mixture_propane_percent(-20);
    assert_eq!(dash.mixture_propane_percent(), 0);
}

#[test]
fn persisted_blob_keeps_camel_case_schema() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    dash.set_gas_type(GasType::Mixed);
    dash.add_measurement();

    let payload = dash.storage().payload().expect("state must be written");
    assert!(payload.contains(r#""currentTemperature""#));
    assert!(payload.contains(r#""gasType":"mixed""#));
    assert!(payload.contains(r#""mixturePropanePercent""#));
    assert!(payload.contains(r#""densityUnit":"kg/L""#));
    assert!(payload.contains(r#""measurements""#));
    assert!(payload.contains(r#""timestamp""#));
}

#[test]
fn reload_round_trips_full_state() {
    let mut dash = Dashboard::load(MemoryStorage::new());
    dash.set_temperature(-30.0);
    dash.set_gas_type(GasType::Mixed);
    dash.set_mixture_propane_percent(40);
    dash.set_density_unit(DensityUnit::PoundPerGallon);
    dash.add_measurement();
    dash.add_measurement();

    let payload = dash
        .storage()
        .payload()
        .expect("state must be written")
        .to_string();
    let reloaded = Dashboard::load(MemoryStorage::with_payload(&payload));
    assert_eq!(reloaded.state(), dash.state());
}
