use super::{map_result, placeholder, prelude::*};

/// What to do with addresses that could not be resolved to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    /// Leave them out of the output layer.
    #[default]
    Drop,
    /// Add a point without geometry.
    Placeholder,
}

/// Why an address could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    LookupFailed,
    NoCandidate,
    InvalidGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geocoded {
    Point(PointFeature),
    Unmatched {
        reason: Unmatched,
        placeholder: Option<PointFeature>,
    },
}

impl Geocoded {
    pub fn into_feature(self) -> Option<PointFeature> {
        match self {
            Self::Point(point) => Some(point),
            Self::Unmatched { placeholder, .. } => placeholder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeocodingStats {
    pub records: usize,
    pub points: usize,
    pub failed: usize,
    pub empty: usize,
    pub invalid_geometry: usize,
    pub placeholders: usize,
}

impl GeocodingStats {
    fn count(&mut self, outcome: &Geocoded) {
        self.records += 1;
        match outcome {
            Geocoded::Point(_) => self.points += 1,
            Geocoded::Unmatched {
                reason,
                placeholder,
            } => {
                match reason {
                    Unmatched::LookupFailed => self.failed += 1,
                    Unmatched::NoCandidate => self.empty += 1,
                    Unmatched::InvalidGeometry => self.invalid_geometry += 1,
                }
                if placeholder.is_some() {
                    self.placeholders += 1;
                }
            }
        }
    }

    /// Number of addresses without any output feature.
    pub fn dropped(&self) -> usize {
        self.records - self.points - self.placeholders
    }
}

pub fn geocode_address<G>(gw: &G, record: &AddressRecord, policy: UnmatchedPolicy) -> Geocoded
where
    G: GeoCodingGateway,
{
    let result = gw.lookup(&record.address);
    if let Some(point) = map_result(&result) {
        if let Some(pos) = point.pos {
            log::debug!("Resolved address '{}': {pos}", record.address);
        }
        return Geocoded::Point(point);
    }
    let reason = if result.is_failed() {
        Unmatched::LookupFailed
    } else if result.is_empty() {
        log::info!("No result found for address '{}'", record.address);
        Unmatched::NoCandidate
    } else {
        Unmatched::InvalidGeometry
    };
    let placeholder = match policy {
        UnmatchedPolicy::Drop => {
            log::warn!(
                "Address '{}' is left out of the layer ({reason:?})",
                record.address
            );
            None
        }
        UnmatchedPolicy::Placeholder => {
            log::warn!(
                "Address '{}' is added without geometry ({reason:?})",
                record.address
            );
            Some(placeholder(record))
        }
    };
    Geocoded::Unmatched {
        reason,
        placeholder,
    }
}

/// Looks up every record one after another and appends
/// the resulting points to `layer`.
///
/// Stops at the first error of the record source.
pub fn geocode_addresses<G, I, E>(
    gw: &G,
    records: I,
    layer: &mut OutputLayer,
    policy: UnmatchedPolicy,
) -> std::result::Result<GeocodingStats, E>
where
    G: GeoCodingGateway,
    I: IntoIterator<Item = std::result::Result<AddressRecord, E>>,
{
    let mut stats = GeocodingStats::default();
    for record in records {
        let record = record?;
        let outcome = geocode_address(gw, &record, policy);
        stats.count(&outcome);
        if let Some(feature) = outcome.into_feature() {
            layer.append(feature);
        }
    }
    if stats.points == 0 {
        log::info!("No valid data was retrieved from the geocoding service");
    }
    Ok(stats)
}
