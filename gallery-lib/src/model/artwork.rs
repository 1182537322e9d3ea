//! Artwork record type

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Stable, globally unique identifier of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub i64);

impl From<i64> for ArtworkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single record of the remote collection.
///
/// Records are immutable once fetched; the same id always describes the same
/// artwork for the life of a session. Every display attribute may be missing
/// upstream, so each one has a `*_or_default` accessor with the text the
/// table shows in its place.
///
/// # Example
///
/// ```
/// use gallery_lib::model::{Artwork, ArtworkId};
///
/// let artwork = Artwork::new(ArtworkId(27992)).with_title("A Sunday on La Grande Jatte");
/// assert_eq!(artwork.title_or_default(), "A Sunday on La Grande Jatte");
/// assert_eq!(artwork.artist_or_default(), "Unknown Artist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique identifier.
    pub id: ArtworkId,
    /// Title of the work.
    #[serde(default)]
    pub title: Option<String>,
    /// Where the work was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist attribution as displayed by the source.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Free-text inscriptions.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Years the work was made in.
    #[serde(flatten)]
    pub dates: DateRange,
}

impl Artwork {
    /// Creates an artwork with the given id and no attributes.
    pub fn new(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            dates: DateRange::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the place of origin.
    pub fn with_place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = Some(place.into());
        self
    }

    /// Sets the artist attribution.
    pub fn with_artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the inscriptions.
    pub fn with_inscriptions(mut self, inscriptions: impl Into<String>) -> Self {
        self.inscriptions = Some(inscriptions.into());
        self
    }

    /// Sets the date range.
    pub fn with_dates(mut self, start: i32, end: i32) -> Self {
        self.dates = DateRange::new(start, end);
        self
    }

    /// Title, or `Untitled`.
    pub fn title_or_default(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    /// Place of origin, or `Unknown`.
    pub fn place_or_default(&self) -> &str {
        non_empty(&self.place_of_origin).unwrap_or("Unknown")
    }

    /// Artist attribution, or `Unknown Artist`.
    pub fn artist_or_default(&self) -> &str {
        non_empty(&self.artist_display).unwrap_or("Unknown Artist")
    }

    /// Inscriptions, or `None`.
    pub fn inscriptions_or_default(&self) -> &str {
        non_empty(&self.inscriptions).unwrap_or("None")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Start and end year of an artwork.
///
/// Displays as `start - end`; a missing bound is left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First year.
    #[serde(rename = "date_start", default)]
    pub start: Option<i32>,
    /// Last year.
    #[serde(rename = "date_end", default)]
    pub end: Option<i32>,
}

impl DateRange {
    /// Creates a range with both bounds set.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{} - {}", start, end),
            (Some(start), None) => write!(f, "{} - ", start),
            (None, Some(end)) => write!(f, " - {}", end),
            (None, None) => write!(f, " - "),
        }
    }
}
