pub mod geocode;
pub mod host;
