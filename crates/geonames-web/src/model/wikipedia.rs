//! Georeferenced Wikipedia articles.

use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, Loose, float, int, position};

/// A Wikipedia article with a position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Wikipedia {
    /// Article title.
    pub title: String,
    /// Start of the article text.
    pub summary: String,
    /// Feature type, e.g. `city` or `landmark`.
    pub feature: String,
    /// Wikipedia language.
    pub lang: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Article position.
    pub position: Position,
    /// Elevation in meters.
    pub elevation: i64,
    /// Matching GeoName, 0 when none.
    pub geoname_id: u64,
    /// Article rank, 1 to 100.
    pub rank: u64,
    /// Thumbnail image URL.
    pub thumbnail_img: String,
    /// Article URL without scheme.
    pub wikipedia_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawWikipedia {
    title: String,
    summary: String,
    feature: String,
    lang: String,
    country_code: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    elevation: Option<Loose>,
    #[serde(rename = "geoNameId")]
    geoname_id: Option<Loose>,
    rank: Option<Loose>,
    thumbnail_img: String,
    wikipedia_url: String,
}

impl FromWire for Wikipedia {
    type Wire = RawWikipedia;

    fn from_wire(wire: RawWikipedia) -> Result<Self, FieldError> {
        Ok(Self {
            title: wire.title,
            summary: wire.summary,
            feature: wire.feature,
            lang: wire.lang,
            country_code: wire.country_code,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            elevation: int("elevation", wire.elevation.as_ref())?,
            geoname_id: int("geoNameId", wire.geoname_id.as_ref())?,
            rank: int("rank", wire.rank.as_ref())?,
            thumbnail_img: wire.thumbnail_img,
            wikipedia_url: wire.wikipedia_url,
        })
    }
}

/// An article with its distance from the queried point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WikipediaNearby {
    /// The article.
    #[serde(flatten)]
    pub article: Wikipedia,
    /// Distance in kilometers.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawWikipediaNearby {
    #[serde(flatten)]
    article: RawWikipedia,
    distance: Option<Loose>,
}

impl FromWire for WikipediaNearby {
    type Wire = RawWikipediaNearby;

    fn from_wire(wire: RawWikipediaNearby) -> Result<Self, FieldError> {
        Ok(Self {
            article: Wikipedia::from_wire(wire.article)?,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}
