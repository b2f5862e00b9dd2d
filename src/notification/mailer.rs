//! Outbound mail transport
//!
//! The `Mailer` trait is the seam between notification dispatch and the SMTP
//! wire: production uses `SmtpMailer`, deployments without SMTP credentials
//! fall back to `LogMailer`, and tests substitute recording transports.

use async_trait::async_trait;
use mail_builder::MessageBuilder;
use mail_send::SmtpClientBuilder;
use thiserror::Error;

use crate::config::SmtpConfig;

/// A plain-text email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail transport error
#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Transport abstraction for sending a single email
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, from: &str, email: &OutboundEmail) -> Result<(), MailError>;
}

/// SMTP transport. Connects per message, which is plenty for the volume of
/// lifecycle notifications this service produces.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, from: &str, email: &OutboundEmail) -> Result<(), MailError> {
        let message = MessageBuilder::new()
            .from(from)
            .to(email.to.as_str())
            .subject(email.subject.as_str())
            .text_body(email.body.as_str());

        SmtpClientBuilder::new(self.config.host.as_str(), self.config.port)
            .implicit_tls(self.config.implicit_tls)
            .credentials((
                self.config.username.as_str(),
                self.config.password.as_str(),
            ))
            .connect()
            .await
            .map_err(|e| MailError::Transport(format!("connecting to SMTP server: {}", e)))?
            .send(message)
            .await
            .map_err(|e| MailError::Transport(format!("sending email: {}", e)))?;

        Ok(())
    }
}

/// Fallback transport that logs instead of delivering. Used when SMTP is not
/// configured so the rest of the system behaves identically.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, from: &str, email: &OutboundEmail) -> Result<(), MailError> {
        tracing::info!(
            from = %from,
            to = %email.to,
            subject = %email.subject,
            "SMTP not configured, logging email instead of sending"
        );
        Ok(())
    }
}
