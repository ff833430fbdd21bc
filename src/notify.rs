//! Completion email sent once persistence has finished.
//!
//! The notification is fixed-content: same subject, same body, same
//! recipient for every run, regardless of how many records were persisted.
//! Send failures are not handled here and propagate to the caller.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::error::Error;
use tracing::{info, instrument};

/// Subject line of the completion email.
pub const SUBJECT: &str = "Airflow Finished";

/// HTML body of the completion email.
pub const BODY_HTML: &str = "<h3>DONE</h3>";

/// SMTP settings and addresses for the completion email.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub from: String,
    pub to: String,
}

/// Build the fixed-content completion message.
fn build_message(config: &MailConfig) -> Result<Message, Box<dyn Error>> {
    let message = Message::builder()
        .from(config.from.parse()?)
        .to(config.to.parse()?)
        .subject(SUBJECT)
        .header(ContentType::TEXT_HTML)
        .body(BODY_HTML.to_string())?;
    Ok(message)
}

/// Send the completion notification over SMTP.
///
/// # Errors
///
/// Returns an error if an address fails to parse, the relay cannot be
/// reached, or the message is rejected.
#[instrument(level = "info", skip_all, fields(to = %config.to))]
pub async fn send_completion(config: &MailConfig) -> Result<(), Box<dyn Error>> {
    let message = build_message(config)?;

    let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?;
    if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
        builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
    }
    let mailer: AsyncSmtpTransport<Tokio1Executor> = builder.build();

    mailer.send(message).await?;
    info!("Sent completion notification");
    Ok(())
}
