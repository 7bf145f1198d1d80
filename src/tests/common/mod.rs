pub mod mocks;

pub use mocks::{ FailingStorage, RecordingMarker };

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}
