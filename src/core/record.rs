use serde::{Deserialize, Serialize};

/// Deserialize a year from a string or an integer (spreadsheet and OMDb compatibility).
///
/// Blank strings and `null` become `None`.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i64),
        String(String),
    }

    match Option::<YearValue>::deserialize(deserializer)? {
        Some(YearValue::Int(i)) => Ok(Some(i.to_string())),
        Some(YearValue::String(s)) if !s.trim().is_empty() => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// One row of a user-submitted spreadsheet or manual import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportRow {
    /// Title as typed by the user
    #[serde(default, alias = "Title")]
    pub title: String,

    /// Release year, usually `YYYY` but anything whose first 4 characters are a year works
    #[serde(
        default,
        alias = "releaseYear",
        alias = "year",
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<String>,
}

impl ImportRow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            release_year: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.release_year = Some(year.into());
        self
    }
}

/// Metadata record from an external catalogue source, treated as ground truth.
///
/// List-valued fields (`genre`, `actors`, `director`) are comma-joined strings, the way
/// catalogue APIs such as OMDb return them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalRecord {
    /// External catalogue id (e.g. an IMDb id), only used for duplicate detection
    #[serde(default, alias = "imdbID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, alias = "Title")]
    pub title: String,

    #[serde(
        default,
        alias = "Year",
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,

    #[serde(default, alias = "Genre", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, alias = "Actors", skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,

    #[serde(default, alias = "Director", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

impl CanonicalRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_actors(mut self, actors: impl Into<String>) -> Self {
        self.actors = Some(actors.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        match self.year.as_deref() {
            Some(year) if !year.is_empty() => format!("{} ({})", self.title, year),
            _ => self.title.clone(),
        }
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
