pub mod geojson;
pub mod terminal;
