//! Degrees/minutes/seconds to signed decimal degrees.

use crate::error::MetadataError;
use crate::error::MetadataResult;
use crate::metadata::RawMetadata;
use serde::Deserialize;
use serde::Serialize;

/// A decoded GPS position plus every GPS sub-tag of the image it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub raw: RawMetadata,
}

impl GpsCoordinate {
    /// Decodes both axes. The latitude reference must be `N`/`S` and the
    /// longitude reference `E`/`W`, and the results must fall within
    /// [-90, 90] and [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidCoordinate`] for malformed input on either axis.
    pub fn from_dms(
        latitude: &[f64],
        latitude_ref: &str,
        longitude: &[f64],
        longitude_ref: &str,
        raw: RawMetadata,
    ) -> MetadataResult<Self> {
        if !matches!(latitude_ref, "N" | "S") {
            return Err(MetadataError::InvalidCoordinate(format!(
                "latitude reference must be N or S, got {latitude_ref:?}"
            )));
        }
        if !matches!(longitude_ref, "E" | "W") {
            return Err(MetadataError::InvalidCoordinate(format!(
                "longitude reference must be E or W, got {longitude_ref:?}"
            )));
        }
        let latitude = decode(latitude, latitude_ref)?;
        let longitude = decode(longitude, longitude_ref)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(MetadataError::InvalidCoordinate(format!(
                "latitude {latitude} out of range"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(MetadataError::InvalidCoordinate(format!(
                "longitude {longitude} out of range"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            raw,
        })
    }
}

/// Converts `(degrees, minutes, seconds)` plus a hemisphere letter into decimal
/// degrees, negative for `S` and `W`.
///
/// # Errors
///
/// Returns [`MetadataError::InvalidCoordinate`] unless `dms` holds exactly three
/// finite non-negative numbers and `reference` is one of `N`, `S`, `E`, `W`.
pub fn decode(dms: &[f64], reference: &str) -> MetadataResult<f64> {
    let &[degrees, minutes, seconds] = dms else {
        return Err(MetadataError::InvalidCoordinate(format!(
            "expected 3 DMS components, got {}",
            dms.len()
        )));
    };
    if dms.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(MetadataError::InvalidCoordinate(format!(
            "DMS components must be finite and non-negative, got {dms:?}"
        )));
    }
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference {
        "N" | "E" => Ok(decimal),
        "S" | "W" => Ok(-decimal),
        other => Err(MetadataError::InvalidCoordinate(format!(
            "unknown hemisphere reference {other:?}"
        ))),
    }
}
