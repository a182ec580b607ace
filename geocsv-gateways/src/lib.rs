pub mod geocoding;
pub mod host;
