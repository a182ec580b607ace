/// The optional properties of a geocoding candidate.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateProperties {
    pub label       : Option<String>,
    pub score       : Option<f64>,
    pub housenumber : Option<String>,
    pub id          : Option<String>,
    pub name        : Option<String>,
    pub postcode    : Option<String>,
    pub citycode    : Option<String>,
    pub city        : Option<String>,
    pub district    : Option<String>,
    pub context     : Option<String>,
    pub r#type      : Option<String>,
    pub importance  : Option<f64>,
    pub street      : Option<String>,
}

/// A single feature returned by a geocoding service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    /// `[lng, lat]` as delivered by the service; may be empty.
    pub coordinates: Vec<f64>,
    pub properties: CandidateProperties,
}

/// The outcome of a single address lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResult {
    /// The request could not be completed or decoded.
    Failed,
    /// The ranked features of a successful response (possibly none).
    Features(Vec<Candidate>),
}

impl GeocodeResult {
    pub const fn empty() -> Self {
        Self::Features(Vec::new())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// `true` for successful responses without any feature.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Features(features) if features.is_empty())
    }

    /// The top-ranked candidate, i.e. always the first feature.
    pub fn top_candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Failed => None,
            Self::Features(features) => features.first(),
        }
    }
}
