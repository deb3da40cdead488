//! Artwork - Catalog Record and Column Schema

use serde::{Deserialize, Deserializer, Serialize};

/// One artwork record as shown in the table
///
/// Identity is positional: selection logic never looks at a record ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Table columns in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtworkField {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl ArtworkField {
    /// All columns, in the order the table shows them
    pub fn all() -> &'static [ArtworkField] {
        &[
            ArtworkField::Title,
            ArtworkField::PlaceOfOrigin,
            ArtworkField::ArtistDisplay,
            ArtworkField::Inscriptions,
            ArtworkField::DateStart,
            ArtworkField::DateEnd,
        ]
    }

    /// JSON field name
    pub fn field(&self) -> &'static str {
        match self {
            ArtworkField::Title => "title",
            ArtworkField::PlaceOfOrigin => "place_of_origin",
            ArtworkField::ArtistDisplay => "artist_display",
            ArtworkField::Inscriptions => "inscriptions",
            ArtworkField::DateStart => "date_start",
            ArtworkField::DateEnd => "date_end",
        }
    }

    /// Translation key for the column header
    pub fn header_key(&self) -> &'static str {
        match self {
            ArtworkField::Title => "col-title",
            ArtworkField::PlaceOfOrigin => "col-origin",
            ArtworkField::ArtistDisplay => "col-artist",
            ArtworkField::Inscriptions => "col-inscriptions",
            ArtworkField::DateStart => "col-date-start",
            ArtworkField::DateEnd => "col-date-end",
        }
    }
}

impl Artwork {
    /// Cell text for a column
    pub fn cell(&self, field: ArtworkField) -> String {
        match field {
            ArtworkField::Title => self.title.clone(),
            ArtworkField::PlaceOfOrigin => self.place_of_origin.clone(),
            ArtworkField::ArtistDisplay => self.artist_display.clone(),
            ArtworkField::Inscriptions => self.inscriptions.clone().unwrap_or_default(),
            ArtworkField::DateStart => self.date_start.map(format_year).unwrap_or_default(),
            ArtworkField::DateEnd => self.date_end.map(format_year).unwrap_or_default(),
        }
    }
}

/// Render a year, marking negative years as BCE
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886,
            "image_id": "2d484387-2509-5e8e-2c43-22f9981972eb"
        }"#;

        let artwork: Artwork = serde_json::from_str(json).expect("decode");
        assert_eq!(artwork.title, "A Sunday on La Grande Jatte");
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_start, Some(1884));
        assert_eq!(artwork.date_end, Some(1886));
    }

    #[test]
    fn test_decode_null_text_as_empty() {
        let json = r#"{
            "title": "Untitled",
            "place_of_origin": null,
            "artist_display": "Unknown",
            "inscriptions": "signed lower right",
            "date_start": null,
            "date_end": -500
        }"#;

        let artwork: Artwork = serde_json::from_str(json).expect("decode");
        assert_eq!(artwork.place_of_origin, "");
        assert_eq!(artwork.date_start, None);
        assert_eq!(artwork.cell(ArtworkField::DateEnd), "500 BCE");
        assert_eq!(artwork.cell(ArtworkField::DateStart), "");
        assert_eq!(artwork.cell(ArtworkField::Inscriptions), "signed lower right");
    }

    #[test]
    fn test_column_order() {
        let fields: Vec<_> = ArtworkField::all().iter().map(|f| f.field()).collect();
        assert_eq!(
            fields,
            vec![
                "title",
                "place_of_origin",
                "artist_display",
                "inscriptions",
                "date_start",
                "date_end"
            ]
        );
    }
}
