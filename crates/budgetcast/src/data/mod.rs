pub mod settings_data;
pub mod storage;
