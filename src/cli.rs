//! Command-line interface definitions for Recipe Harvest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Paths and SMTP settings are injected here rather than hardcoded; most
//! options can also be provided via environment variables.

use clap::Parser;

/// Command-line arguments for the Recipe Harvest pipeline.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// recipe_harvest -u ./latest_salad_recipes.txt -i ./images -d ./recipes.db
///
/// # With the completion email enabled
/// recipe_harvest -u ./urls.txt -i ./images -d ./recipes.db \
///     --smtp-host smtp.example.com --mail-to jon@yahoo.com
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the newline-delimited list of recipe page URLs
    #[arg(short, long, env = "RECIPE_URL_FILE")]
    pub url_file: String,

    /// Directory where downloaded hero images are written
    #[arg(short, long, env = "RECIPE_IMAGE_DIR")]
    pub image_dir: String,

    /// Path to the SQLite database file
    #[arg(short, long, env = "RECIPE_DATABASE")]
    pub database: String,

    /// Pause before each image download, in seconds
    #[arg(long, default_value_t = 3)]
    pub throttle_secs: u64,

    /// SMTP relay host for the completion email (notification is skipped when unset)
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP username
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD")]
    pub smtp_password: Option<String>,

    /// Sender address for the completion email
    #[arg(long, env = "MAIL_FROM", default_value = "airflow@example.com")]
    pub mail_from: String,

    /// Recipient address for the completion email
    #[arg(long, env = "MAIL_TO", default_value = "jon@yahoo.com")]
    pub mail_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "recipe_harvest",
            "--url-file",
            "./urls.txt",
            "--image-dir",
            "./images",
            "--database",
            "./recipes.db",
        ]);

        assert_eq!(cli.url_file, "./urls.txt");
        assert_eq!(cli.image_dir, "./images");
        assert_eq!(cli.database, "./recipes.db");
        assert_eq!(cli.throttle_secs, 3);
        assert!(cli.smtp_host.is_none());
        assert_eq!(cli.mail_to, "jon@yahoo.com");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "recipe_harvest",
            "-u",
            "/tmp/urls.txt",
            "-i",
            "/tmp/images",
            "-d",
            "/tmp/recipes.db",
            "--throttle-secs",
            "0",
        ]);

        assert_eq!(cli.url_file, "/tmp/urls.txt");
        assert_eq!(cli.image_dir, "/tmp/images");
        assert_eq!(cli.database, "/tmp/recipes.db");
        assert_eq!(cli.throttle_secs, 0);
    }
}
