use anyhow::Result;
use geocsv_core::entities::{AttributeValue, OutputLayer, PointFeature};
use serde_json::{json, Map, Value};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Stores registered layers as GeoJSON `FeatureCollection`.
#[derive(Debug, Clone)]
pub struct GeoJsonFile {
    path: PathBuf,
}

impl GeoJsonFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, layer: &OutputLayer) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &feature_collection(layer))?;
        writer.flush()?;
        log::info!(
            "Stored layer '{}' with {} features in {}",
            layer.name(),
            layer.len(),
            self.path.display()
        );
        Ok(())
    }
}

pub fn feature_collection(layer: &OutputLayer) -> Value {
    let features: Vec<_> = layer
        .features()
        .iter()
        .map(|f| feature(layer, f))
        .collect();
    let schema: Vec<_> = layer
        .schema()
        .iter()
        .map(|field| {
            let field_type: &'static str = field.field_type.into();
            json!({ "name": field.name, "type": field_type })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "name": layer.name(),
        "crs": {
            "type": "name",
            "properties": { "name": crs_urn(layer.crs()) }
        },
        "schema": schema,
        "features": features
    })
}

fn feature(layer: &OutputLayer, point: &PointFeature) -> Value {
    let properties: Map<String, Value> = layer
        .schema()
        .iter()
        .zip(point.attributes.values())
        .map(|(field, value)| {
            let value = match value {
                AttributeValue::Text(s) => Value::from(s),
                AttributeValue::Number(n) => Value::from(n),
            };
            (field.name.to_owned(), value)
        })
        .collect();
    let geometry = match point.pos {
        Some(pos) => json!({
            "type": "Point",
            "coordinates": [pos.lng(), pos.lat()]
        }),
        None => Value::Null,
    };
    json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": properties
    })
}

fn crs_urn(crs: &str) -> String {
    format!("urn:ogc:def:crs:{}", crs.replacen(':', "::", 1))
}
