//! Web map links for a decoded coordinate.

use arbitrary::Arbitrary;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

#[derive(
    ValueEnum, Arbitrary, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum MapService {
    #[default]
    #[value(name = "google")]
    #[serde(rename = "google")]
    GoogleMaps,
    #[value(name = "osm")]
    #[serde(rename = "osm")]
    OpenStreetMap,
    #[value(name = "bing")]
    #[serde(rename = "bing")]
    BingMaps,
}

impl MapService {
    pub const ALL: [MapService; 3] = [
        MapService::GoogleMaps,
        MapService::OpenStreetMap,
        MapService::BingMaps,
    ];

    /// Name used on the command line and in settings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            MapService::GoogleMaps => "google",
            MapService::OpenStreetMap => "osm",
            MapService::BingMaps => "bing",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MapService::GoogleMaps => "Google Maps",
            MapService::OpenStreetMap => "OpenStreetMap",
            MapService::BingMaps => "Bing Maps",
        }
    }

    #[must_use]
    pub fn url(self, latitude: f64, longitude: f64) -> String {
        match self {
            MapService::GoogleMaps => format!("https://www.google.com/maps?q={latitude},{longitude}"),
            MapService::OpenStreetMap => {
                format!("https://www.openstreetmap.org/?mlat={latitude}&mlon={longitude}")
            }
            MapService::BingMaps => format!("https://www.bing.com/maps?cp={latitude}~{longitude}"),
        }
    }
}

impl fmt::Display for MapService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
