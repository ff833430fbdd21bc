//! Recipe page scrapers.
//!
//! One submodule per source site. Each scraper exports the same two-phase
//! surface:
//!
//! 1. `load_urls(path)`: read the newline-delimited URL list
//! 2. `scrape_recipes(urls)`: fetch each page and extract one
//!    [`crate::models::RecipeRecord`] per successful response
//!
//! Scrapers fetch sequentially and skip pages that answer with a non-success
//! status; network errors are not caught here and abort the run.

pub mod allrecipes;
