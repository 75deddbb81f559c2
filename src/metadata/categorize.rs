//! Best-effort grouping of tag names into display categories.
//!
//! Matching is by substring against fixed rule lists, checked in declaration
//! order, so a name like `MakerNote` lands in camera settings because it
//! contains `Make`. This is a display convenience, not a classification of
//! what the tag means.

use crate::metadata::RawMetadata;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Categories in priority order; `Other` catches everything unmatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Camera Settings")]
    CameraSettings,
    #[serde(rename = "Image Properties")]
    ImageProperties,
    #[serde(rename = "File Information")]
    FileInformation,
    #[serde(rename = "GPS Data")]
    GpsData,
    #[serde(rename = "Other")]
    Other,
}

pub type CategorizedMetadata = BTreeMap<Category, RawMetadata>;

const CAMERA_RULES: &[&str] = &[
    "Make",
    "Model",
    "ExposureTime",
    "FNumber",
    "ISOSpeedRatings",
    "PhotographicSensitivity",
    "FocalLength",
    "ExposureProgram",
    "MeteringMode",
    "Flash",
    "WhiteBalance",
];

const IMAGE_RULES: &[&str] = &[
    "Width",
    "Height",
    "Orientation",
    "Resolution",
    "ColorSpace",
    "XResolution",
    "YResolution",
    "ResolutionUnit",
];

const FILE_RULES: &[&str] = &[
    "FileName",
    "FileSize",
    "FileType",
    "MIMEType",
    "ModifyDate",
    "CreateDate",
];

const GPS_RULES: &[&str] = &[
    "GPSLatitude",
    "GPSLongitude",
    "GPSAltitude",
    "GPSSpeed",
    "GPSImgDirection",
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CameraSettings,
        Category::ImageProperties,
        Category::FileInformation,
        Category::GpsData,
        Category::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::CameraSettings => "Camera Settings",
            Category::ImageProperties => "Image Properties",
            Category::FileInformation => "File Information",
            Category::GpsData => "GPS Data",
            Category::Other => "Other",
        }
    }

    const fn rules(self) -> &'static [&'static str] {
        match self {
            Category::CameraSettings => CAMERA_RULES,
            Category::ImageProperties => IMAGE_RULES,
            Category::FileInformation => FILE_RULES,
            Category::GpsData => GPS_RULES,
            Category::Other => &[],
        }
    }

    /// First category whose rules contain a substring of `key`.
    #[must_use]
    pub fn for_key(key: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.rules().iter().any(|rule| key.contains(rule)))
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Splits `raw` into categories. Every key lands in exactly one category and
/// empty categories are left out.
#[must_use]
pub fn categorize(raw: &RawMetadata) -> CategorizedMetadata {
    let mut out = CategorizedMetadata::new();
    for (key, value) in raw {
        out.entry(Category::for_key(key))
            .or_default()
            .insert(key.clone(), value.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataValue;

    fn raw(keys: &[&str]) -> RawMetadata {
        keys.iter()
            .map(|k| ((*k).to_string(), MetadataValue::from("v")))
            .collect()
    }

    #[test]
    fn empty_input_gives_no_categories() {
        assert!(categorize(&RawMetadata::new()).is_empty());
    }

    #[test]
    fn groups_by_rule_lists() {
        let out = categorize(&raw(&[
            "Make",
            "ImageWidth",
            "FileSize",
            "GPSAltitude",
            "Software",
        ]));
        assert!(out[&Category::CameraSettings].contains_key("Make"));
        assert!(out[&Category::ImageProperties].contains_key("ImageWidth"));
        assert!(out[&Category::FileInformation].contains_key("FileSize"));
        assert!(out[&Category::GpsData].contains_key("GPSAltitude"));
        assert!(out[&Category::Other].contains_key("Software"));
    }

    #[test]
    fn camera_wins_ties() {
        // Contains both "Model" (camera) and "Width" (image).
        assert_eq!(Category::for_key("ModelWidth"), Category::CameraSettings);
        assert_eq!(Category::for_key("MakerNote"), Category::CameraSettings);
    }

    #[test]
    fn substring_matches_are_kept() {
        assert_eq!(Category::for_key("FocalPlaneXResolution"), Category::ImageProperties);
        assert_eq!(Category::for_key("GPSLatitudeRef"), Category::GpsData);
    }

    #[test]
    fn unmatched_only_fills_other() {
        let out = categorize(&raw(&["Software", "Artist"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[&Category::Other].len(), 2);
    }

    #[test]
    fn every_key_lands_in_exactly_one_category() {
        let input = raw(&[
            "Make",
            "MakerNote",
            "ImageWidth",
            "FileSize",
            "GPSAltitude",
            "GPSLatitudeRef",
            "Software",
            "Unknown_9999",
        ]);
        let out = categorize(&input);

        let mut seen: Vec<&String> = out.values().flat_map(|m| m.keys()).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total, "a key appeared in two categories");
        assert_eq!(seen, input.keys().collect::<Vec<_>>());
        for (category, entries) in &out {
            for (key, value) in entries {
                assert_eq!(Category::for_key(key), *category);
                assert_eq!(input.get(key), Some(value));
            }
        }
    }

    #[test]
    fn categorizing_twice_gives_the_same_result() {
        let input = raw(&["Make", "ImageWidth", "GPSAltitude", "Software"]);
        assert_eq!(categorize(&input), categorize(&input));
    }

    #[test]
    fn category_keys_serialize_as_labels() {
        let out = categorize(&raw(&["Make"]));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json, serde_json::json!({"Camera Settings": {"Make": "v"}}));
    }
}
