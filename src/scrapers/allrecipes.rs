//! Allrecipes recipe page scraper.
//!
//! This module fetches recipe pages from a newline-delimited URL list and
//! extracts structured fields via fixed CSS selectors. The markup targeted
//! here is the classic allrecipes.com layout: `.recipe-summary__h1` for the
//! title, `.submitter__name` / `.submitter__description` for the submitter
//! block, `.recipe-ingred_txt` for ingredient lines, and `.calorie-count`
//! for the nutrition summary.
//!
//! # Failure semantics
//!
//! Pages answering with a non-success status are skipped with a warning and
//! produce no record. Network errors are not caught and propagate to the
//! caller, aborting the run.

use crate::models::{Ingredient, RecipeRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{get, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tokio::fs;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Boilerplate line appearing at the end of the ingredient list on every
/// page; never a real ingredient.
const INGREDIENT_BOILERPLATE: &str = "Add all ingredients to list";

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".recipe-summary__h1").unwrap());
static SUBMITTER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".submitter__name").unwrap());
static DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".submitter__description").unwrap());
static INGREDIENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".recipe-ingred_txt").unwrap());
static HERO_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".hero-photo__wrap #BI_openPhotoModal1").unwrap());
static CALORIES_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".calorie-count").unwrap());

/// Extracts the numeric part of the calorie text, e.g. `"120 cals"` -> `"120"`.
static CALORIE_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Read the newline-delimited list of recipe page URLs from `path`.
///
/// Lines are trimmed and blank lines skipped; every remaining line must be
/// an absolute URL.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line fails to parse as
/// a URL.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_urls(path: &str) -> Result<Vec<Url>, Box<dyn Error>> {
    let contents = fs::read_to_string(path).await?;
    let mut urls = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        urls.push(Url::parse(line)?);
    }
    info!(count = urls.len(), "Loaded recipe URLs");
    debug!(urls = ?urls, "Recipe URLs");
    Ok(urls)
}

/// Fetch each recipe page and extract one [`RecipeRecord`] per successful
/// response.
///
/// Pages are fetched sequentially in input order. A non-success status skips
/// the URL without emitting a record, so the output length equals the number
/// of 200-status responses.
///
/// # Errors
///
/// Returns an error on the first network failure; already-collected records
/// are discarded along with the run.
#[instrument(level = "info", skip_all)]
pub async fn scrape_recipes(urls: Vec<Url>) -> Result<Vec<RecipeRecord>, Box<dyn Error>> {
    let mut records = Vec::new();
    for url in urls {
        let response = get(url.clone()).await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%url, %status, "Skipping recipe page");
            continue;
        }
        let body = response.text().await?;
        let record = parse_recipe(url.as_str(), &body);
        debug!(url = %record.url, title = %record.title, ingredients = record.ingredients.len(), "Parsed recipe");
        records.push(record);
    }
    info!(count = records.len(), "Scraped recipe records");
    Ok(records)
}

/// Parse one recipe page into a [`RecipeRecord`].
///
/// Each field takes the first matching element's text (ingredients take all
/// matches); missing elements leave the field at its placeholder. Defaults
/// reset for every page.
pub fn parse_recipe(url: &str, html: &str) -> RecipeRecord {
    let document = Html::parse_document(html);
    let mut record = RecipeRecord::new(url);

    if let Some(element) = document.select(&TITLE_SELECTOR).next() {
        record.title = element_text(&element);
    }

    if let Some(element) = document.select(&SUBMITTER_SELECTOR).next() {
        record.submitter = element_text(&element);
    }

    if let Some(element) = document.select(&DESCRIPTION_SELECTOR).next() {
        record.description = element_text(&element).replace('"', "");
    }

    for element in document.select(&INGREDIENT_SELECTOR) {
        let text = element_text(&element);
        if text.is_empty() || text.contains(INGREDIENT_BOILERPLATE) {
            continue;
        }
        record.ingredients.push(Ingredient { step: text });
    }

    if let Some(element) = document.select(&HERO_IMAGE_SELECTOR).next() {
        if let Some(src) = element.value().attr("src") {
            record.image_url = src.to_string();
        }
    }

    if let Some(element) = document.select(&CALORIES_SELECTOR).next() {
        let text = element_text(&element);
        if let Some(value) = CALORIE_VALUE.find(&text) {
            record.calories = value.as_str().to_string();
        }
    }

    record
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
