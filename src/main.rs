//! # Recipe Harvest
//!
//! A recipe scraping pipeline that fetches recipe pages from a URL list,
//! extracts structured fields, downloads each recipe's hero image, persists
//! every record to SQLite, and sends a fixed completion email.
//!
//! ## Usage
//!
//! ```sh
//! recipe_harvest -u ./latest_salad_recipes.txt -i ./images -d ./recipes.db
//! ```
//!
//! ## Architecture
//!
//! Four strictly sequential stages, each consuming the full output of the
//! previous one:
//! 1. **Parse**: fetch each listed URL and extract one record per
//!    successful response
//! 2. **Images**: download each record's hero image under a random file
//!    name, throttled between downloads; per-record failures leave
//!    `local_image` unset
//! 3. **Persist**: insert `(url, json_payload)` rows into SQLite, one
//!    commit per record
//! 4. **Notify**: send the fixed completion email
//!
//! A failure in stage 1, 3, or 4 aborts the run; the external scheduler
//! decides whether to retry on its next trigger.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod db;
mod images;
mod models;
mod notify;
mod scrapers;
mod utils;

use cli::Cli;
use notify::MailConfig;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("recipe_harvest starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.url_file, ?args.image_dir, ?args.database, "Parsed CLI arguments");

    // Early check: ensure the image directory is writable
    if let Err(e) = ensure_writable_dir(&args.image_dir).await {
        error!(
            path = %args.image_dir,
            error = %e,
            "Image directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Stage 1: load URLs and parse recipe pages ----
    let urls = scrapers::allrecipes::load_urls(&args.url_file).await?;
    let records = scrapers::allrecipes::scrape_recipes(urls).await?;
    info!(count = records.len(), "Parse stage complete");

    // ---- Stage 2: download hero images ----
    let throttle = Duration::from_secs(args.throttle_secs);
    let records = images::download_images(records, &args.image_dir, throttle).await;

    // ---- Stage 3: persist records ----
    let conn = db::connect(&args.database)?;
    db::init_schema(&conn)?;
    let inserted = db::store_records(&conn, &records)?;
    info!(inserted, database = %args.database, "Persist stage complete");

    // ---- Stage 4: completion notification ----
    match args.smtp_host {
        Some(smtp_host) => {
            let mail_config = MailConfig {
                smtp_host,
                smtp_username: args.smtp_username,
                smtp_password: args.smtp_password,
                from: args.mail_from,
                to: args.mail_to,
            };
            notify::send_completion(&mail_config).await?;
        }
        None => warn!("No SMTP host configured; skipping completion notification"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Pipeline run complete"
    );

    Ok(())
}
