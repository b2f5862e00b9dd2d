//! Asynchronous, best-effort email notifications for lifecycle events
//!
//! Dispatch is one-way: callers spawn a notification task and move on, the
//! triggering request never waits for or learns about delivery. A failed
//! send is logged and dropped.

mod mailer;
pub mod templates;

pub use mailer::{LogMailer, MailError, Mailer, OutboundEmail, SmtpMailer};

use std::sync::Arc;

use crate::application::LoanApplication;
use crate::contact::ContactMessage;

/// Notification dispatcher bound to a mail transport and the fixed
/// sender/admin addresses.
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    mail_from: String,
    admin_email: String,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, mail_from: String, admin_email: String) -> Self {
        Self {
            mailer,
            mail_from,
            admin_email,
        }
    }

    /// Applicant confirmation plus admin alert for a fresh submission.
    pub async fn application_submitted(&self, app: &LoanApplication) {
        self.dispatch(templates::application_confirmation(app)).await;
        self.dispatch(templates::new_application_alert(app, &self.admin_email))
            .await;
    }

    /// Status-change notification to the applicant.
    pub async fn application_status_changed(&self, app: &LoanApplication) {
        self.dispatch(templates::status_update(app)).await;
    }

    /// Sender confirmation plus admin alert for an inbound contact message.
    pub async fn contact_message_received(&self, message: &ContactMessage) {
        self.dispatch(templates::contact_confirmation(message)).await;
        self.dispatch(templates::contact_alert(message, &self.admin_email))
            .await;
    }

    async fn dispatch(&self, email: OutboundEmail) {
        if let Err(e) = self.mailer.send(&self.mail_from, &email).await {
            tracing::warn!(
                to = %email.to,
                subject = %email.subject,
                error = %e,
                "Failed to send notification email"
            );
        }
    }
}
