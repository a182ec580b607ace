use std::fmt;

/// Identifier of the coordinate reference system of all points (WGS 84).
pub const CRS_EPSG_4326: &str = "EPSG:4326";

/// An unprojected WGS 84 position.
///
/// The degrees are stored exactly as delivered by the geocoding
/// service, i.e. without any rounding or range clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lng: f64,
    lat: f64,
}

impl MapPoint {
    pub const fn from_lng_lat_deg(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Builds a point from a GeoJSON-style `[lng, lat, ...]` list.
    ///
    /// Returns `None` if less than two values are available or
    /// if one of them is not a finite number. Additional values
    /// (e.g. an altitude) are ignored.
    pub fn try_from_coordinates(coordinates: &[f64]) -> Option<Self> {
        match coordinates {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => {
                Some(Self::from_lng_lat_deg(*lng, *lat))
            }
            _ => None,
        }
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn to_lng_lat_deg(self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}
