//! Numeric EXIF tag id to name lookup.
//!
//! Names come from `kamadak-exif`'s tag table. The EXIF namespace covers every
//! tag that can appear in the primary IFD chain (TIFF, Exif and Interop
//! sub-directories), the GPS namespace only the GPS sub-directory.

use exif::Context;
use exif::Tag;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Exif,
    Gps,
}

impl Namespace {
    fn contexts(self) -> &'static [Context] {
        match self {
            Namespace::Exif => &[Context::Tiff, Context::Exif, Context::Interop],
            Namespace::Gps => &[Context::Gps],
        }
    }

    fn placeholder(self, tag_id: u16) -> String {
        match self {
            Namespace::Exif => format!("Unknown_{tag_id}"),
            Namespace::Gps => format!("GPS_{tag_id}"),
        }
    }
}

/// Returns the canonical name for `tag_id`, or `Unknown_<id>` / `GPS_<id>` when
/// the id is not assigned in `namespace`.
#[must_use]
pub fn resolve(tag_id: u16, namespace: Namespace) -> String {
    namespace
        .contexts()
        .iter()
        .map(|&context| Tag(context, tag_id))
        // Only tags with a table entry carry a description.
        .find(|tag| tag.description().is_some())
        .map_or_else(|| namespace.placeholder(tag_id), |tag| tag.to_string())
}
