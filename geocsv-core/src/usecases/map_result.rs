use super::prelude::*;

/// Turns the top-ranked candidate of a lookup into a point.
///
/// Returns `None` if the lookup failed, if no candidate was found,
/// or if the first candidate has no usable coordinates.
/// Subsequent candidates are never considered.
pub fn map_result(result: &GeocodeResult) -> Option<PointFeature> {
    let candidate = result.top_candidate()?;
    let pos = MapPoint::try_from_coordinates(&candidate.coordinates)?;
    let attributes = point_attributes(&candidate.properties, pos);
    Some(PointFeature {
        pos: Some(pos),
        attributes,
    })
}

fn point_attributes(properties: &CandidateProperties, pos: MapPoint) -> PointAttributes {
    let CandidateProperties {
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
        r#type,
        importance,
        street,
    } = properties.clone();
    let (longitude, latitude) = pos.to_lng_lat_deg();
    PointAttributes {
        label: label.unwrap_or_default(),
        score: score.unwrap_or_default(),
        housenumber: housenumber.unwrap_or_default(),
        id: id.unwrap_or_default(),
        name: name.unwrap_or_default(),
        postcode: postcode.unwrap_or_default(),
        citycode: citycode.unwrap_or_default(),
        longitude,
        latitude,
        city: city.unwrap_or_default(),
        district: district.unwrap_or_default(),
        context: context.unwrap_or_default(),
        r#type: r#type.unwrap_or_default(),
        importance: importance.unwrap_or_default(),
        street: street.unwrap_or_default(),
    }
}

/// A point without geometry that stands in for an unmatched address.
///
/// The `label` is the normalized address exactly as it was sent
/// to the geocoding service (spaces replaced by `+`).
pub fn placeholder(record: &AddressRecord) -> PointFeature {
    PointFeature {
        pos: None,
        attributes: PointAttributes {
            label: record.address.clone(),
            ..Default::default()
        },
    }
}
