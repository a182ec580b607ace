use crate::{geo::MapPoint, layer::AttributeValue};

/// The attribute record of an output point.
///
/// Text fields default to an empty string and
/// numeric fields to `0`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointAttributes {
    pub label       : String,
    pub score       : f64,
    pub housenumber : String,
    pub id          : String,
    pub name        : String,
    pub postcode    : String,
    pub citycode    : String,
    pub longitude   : f64,
    pub latitude    : f64,
    pub city        : String,
    pub district    : String,
    pub context     : String,
    pub r#type      : String,
    pub importance  : f64,
    pub street      : String,
}

impl PointAttributes {
    /// The values in the order of [`crate::layer::POINT_LAYER_SCHEMA`].
    pub fn values(&self) -> [AttributeValue; 15] {
        use AttributeValue::{Number, Text};
        [
            Text(self.label.clone()),
            Number(self.score),
            Text(self.housenumber.clone()),
            Text(self.id.clone()),
            Text(self.name.clone()),
            Text(self.postcode.clone()),
            Text(self.citycode.clone()),
            Number(self.longitude),
            Number(self.latitude),
            Text(self.city.clone()),
            Text(self.district.clone()),
            Text(self.context.clone()),
            Text(self.r#type.clone()),
            Number(self.importance),
            Text(self.street.clone()),
        ]
    }
}

/// A geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// `None` only for placeholders of unmatched addresses.
    pub pos: Option<MapPoint>,
    pub attributes: PointAttributes,
}

impl PointFeature {
    pub fn has_geometry(&self) -> bool {
        self.pos.is_some()
    }
}
