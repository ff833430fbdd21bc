//! Data model for scraped recipe records.
//!
//! The pipeline produces exactly one entity: [`RecipeRecord`], created by the
//! parser stage, enriched with a local image path by the download stage, and
//! serialized to a single JSON payload by the persistence stage. Records are
//! never mutated after insertion.
//!
//! # Defaults
//!
//! Every field except `url` degrades to an explicit placeholder when the
//! corresponding page element is missing: `"-"` for text fields, `"0"` for
//! calories, an empty list for ingredients. `local_image` is the one
//! exception; it stays `None` until the download stage runs and remains
//! `None` when the download fails.

use serde::{Deserialize, Serialize};

/// Placeholder value for text fields whose page element was not found.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Default calorie value when the calorie element is missing.
pub const CALORIES_DEFAULT: &str = "0";

/// A single ingredient line extracted from a recipe page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ingredient {
    /// The ingredient text, trimmed, e.g. `"2 heads romaine lettuce"`.
    pub step: String,
}

/// One scraped recipe's structured data.
///
/// All fields are always present in the serialized payload; `local_image`
/// serializes as `null` until an image has been downloaded successfully.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecipeRecord {
    /// The source page URL. Always present and non-empty.
    pub url: String,
    /// The recipe title.
    pub title: String,
    /// Name of the user who submitted the recipe.
    pub submitter: String,
    /// The submitter's description of the recipe, quote characters removed.
    pub description: String,
    /// Calorie count as a numeric string, unit suffix stripped.
    pub calories: String,
    /// Ingredient lines in document order, boilerplate and blanks excluded.
    pub ingredients: Vec<Ingredient>,
    /// URL of the hero image, taken from the image element's `src` attribute.
    pub image_url: String,
    /// File name of the downloaded hero image, `None` until the download
    /// stage runs or when the download failed.
    pub local_image: Option<String>,
}

impl RecipeRecord {
    /// Create a record for `url` with every other field at its placeholder.
    ///
    /// Defaults are per-record: each URL starts from a fresh set of
    /// placeholders rather than carrying values over from the previous page.
    pub fn new(url: &str) -> Self {
        RecipeRecord {
            url: url.to_string(),
            title: FIELD_PLACEHOLDER.to_string(),
            submitter: FIELD_PLACEHOLDER.to_string(),
            description: FIELD_PLACEHOLDER.to_string(),
            calories: CALORIES_DEFAULT.to_string(),
            ingredients: Vec::new(),
            image_url: FIELD_PLACEHOLDER.to_string(),
            local_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_uses_placeholders() {
        let record = RecipeRecord::new("https://example.com/recipe/1");
        assert_eq!(record.url, "https://example.com/recipe/1");
        assert_eq!(record.title, "-");
        assert_eq!(record.submitter, "-");
        assert_eq!(record.description, "-");
        assert_eq!(record.calories, "0");
        assert!(record.ingredients.is_empty());
        assert_eq!(record.image_url, "-");
        assert!(record.local_image.is_none());
    }

    #[test]
    fn test_serialized_payload_has_all_fields() {
        let record = RecipeRecord::new("https://example.com/recipe/1");
        let json = serde_json::to_string(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for field in [
            "url",
            "title",
            "submitter",
            "description",
            "calories",
            "ingredients",
            "image_url",
            "local_image",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert!(value["local_image"].is_null());
    }

    #[test]
    fn test_local_image_serializes_as_name() {
        let mut record = RecipeRecord::new("https://example.com/recipe/1");
        record.local_image = Some("00ff.png".to_string());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["local_image"], "00ff.png");
    }
}
