use anyhow::Result;
use geocsv_core::{
    entities::{Candidate, CandidateProperties, GeocodeResult},
    gateways::geocode::GeoCodingGateway,
};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://api-adresse.data.gouv.fr/search/";

/// Address search of the French "Base Adresse Nationale".
#[derive(Debug, Clone)]
pub struct Ban {
    api_url: String,
    client: reqwest::blocking::Client,
}

impl Ban {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The address is inserted as it is, i.e. it must
    /// already be prepared for the query string.
    pub fn search_url(&self, address: &str) -> String {
        format!("{}?q={address}&limit=1", self.api_url)
    }

    fn search(&self, url: &str) -> Result<GeocodeResult> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let response: SearchResponse = response.json()?;
        Ok(response.into())
    }
}

impl Default for Ban {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl GeoCodingGateway for Ban {
    fn lookup(&self, address: &str) -> GeocodeResult {
        let url = self.search_url(address);
        log::info!("Request to geocoding API: {url}");
        match self.search(&url) {
            Ok(res) => res,
            Err(err) => {
                log::error!("Geocoding request for address '{address}' failed: {err}");
                GeocodeResult::Failed
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

// Values are kept untyped to tolerate e.g. numeric postcodes.
#[derive(Debug, Default, Deserialize)]
struct Properties {
    label: Option<Value>,
    score: Option<Value>,
    housenumber: Option<Value>,
    id: Option<Value>,
    name: Option<Value>,
    postcode: Option<Value>,
    citycode: Option<Value>,
    city: Option<Value>,
    district: Option<Value>,
    context: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<Value>,
    importance: Option<Value>,
    street: Option<Value>,
}

fn text(v: Option<Value>) -> Option<String> {
    match v? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn number(v: Option<Value>) -> Option<f64> {
    match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<Properties> for CandidateProperties {
    fn from(from: Properties) -> Self {
        let Properties {
            label,
            score,
            housenumber,
            id,
            name,
            postcode,
            citycode,
            city,
            district,
            context,
            kind,
            importance,
            street,
        } = from;
        Self {
            label: text(label),
            score: number(score),
            housenumber: text(housenumber),
            id: text(id),
            name: text(name),
            postcode: text(postcode),
            citycode: text(citycode),
            city: text(city),
            district: text(district),
            context: text(context),
            r#type: text(kind),
            importance: number(importance),
            street: text(street),
        }
    }
}

impl From<Feature> for Candidate {
    fn from(from: Feature) -> Self {
        let Feature {
            geometry,
            properties,
        } = from;
        Self {
            coordinates: geometry.map(|g| g.coordinates).unwrap_or_default(),
            properties: properties.into(),
        }
    }
}

impl From<SearchResponse> for GeocodeResult {
    fn from(from: SearchResponse) -> Self {
        Self::Features(from.features.into_iter().map(Candidate::from).collect())
    }
}

#[cfg(test)]
fn parse_response(json: &str) -> serde_json::Result<GeocodeResult> {
    serde_json::from_str::<SearchResponse>(json).map(Into::into)
}
