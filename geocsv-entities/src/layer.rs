use crate::{geo::CRS_EPSG_4326, point::PointFeature};
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    String,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub field_type: FieldType,
}

const fn field(name: &'static str, field_type: FieldType) -> Field {
    Field { name, field_type }
}

/// The fixed attribute schema of every output layer.
pub const POINT_LAYER_SCHEMA: [Field; 15] = [
    field("label", FieldType::String),
    field("score", FieldType::Double),
    field("housenumber", FieldType::String),
    field("id", FieldType::String),
    field("name", FieldType::String),
    field("postcode", FieldType::String),
    field("citycode", FieldType::String),
    field("longitude", FieldType::Double),
    field("latitude", FieldType::Double),
    field("city", FieldType::String),
    field("district", FieldType::String),
    field("context", FieldType::String),
    field("type", FieldType::String),
    field("importance", FieldType::Double),
    field("street", FieldType::String),
];

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
}

impl AttributeValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::String,
            Self::Number(_) => FieldType::Double,
        }
    }
}

/// An in-memory point dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayer {
    name: String,
    schema: &'static [Field],
    features: Vec<PointFeature>,
}

impl OutputLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: &POINT_LAYER_SCHEMA,
            features: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn crs(&self) -> &'static str {
        CRS_EPSG_4326
    }

    pub const fn schema(&self) -> &'static [Field] {
        self.schema
    }

    pub fn append(&mut self, feature: PointFeature) {
        self.features.push(feature);
    }

    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
