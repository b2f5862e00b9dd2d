//! Notification dispatch tests
//!
//! Every lifecycle event produces its notification attempts regardless of
//! whether the transport delivers, and transport failures never escape the
//! dispatcher.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use rsfinance_server::application::{ApplicationStatus, LoanApplication};
use rsfinance_server::contact::ContactMessage;
use rsfinance_server::notification::{MailError, Mailer, Notifier, OutboundEmail};

/// Transport that records every attempt and optionally fails each one.
struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailer {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail,
        })
    }

    fn attempts(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, _from: &str, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            Err(MailError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn notifier_with(mailer: Arc<RecordingMailer>) -> Notifier {
    Notifier::new(
        mailer,
        "noreply@rsfinanceservice.com".to_string(),
        "admin@rsfinanceservice.com".to_string(),
    )
}

fn sample_application(status: ApplicationStatus) -> LoanApplication {
    let now = Utc::now();
    LoanApplication {
        id: 7,
        application_id: "RSF17561234567890042".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "a@x.com".to_string(),
        phone: "9999999999".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 18).unwrap(),
        gender: None,
        marital_status: None,
        father_name: None,
        mother_name: None,
        current_address: "12 Lake Road".to_string(),
        permanent_address: None,
        city: "Kolkata".to_string(),
        state: "West Bengal".to_string(),
        pincode: "700001".to_string(),
        residence_type: None,
        years_at_current_address: None,
        employment_type: "Salaried".to_string(),
        company_name: None,
        designation: None,
        work_experience: None,
        monthly_income: 45_000,
        additional_income: None,
        official_email: None,
        office_address: None,
        loan_type: "Personal".to_string(),
        loan_amount: 50_000,
        loan_purpose: "Medical expenses".to_string(),
        preferred_tenure: 12,
        existing_loans: None,
        bank_account: None,
        ifsc_code: None,
        status,
        reviewed_by: None,
        review_comments: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_message() -> ContactMessage {
    ContactMessage {
        id: 3,
        name: "Ravi Sen".to_string(),
        email: "ravi@example.com".to_string(),
        phone: None,
        subject: "Loan eligibility".to_string(),
        message: "Am I eligible for a business loan?".to_string(),
        is_read: false,
        created_at: Utc::now(),
    }
}

// ============================================================================
// Submission notifications
// ============================================================================

#[tokio::test]
async fn test_submission_sends_applicant_and_admin_emails() {
    let mailer = RecordingMailer::new(false);
    let notifier = notifier_with(mailer.clone());

    notifier
        .application_submitted(&sample_application(ApplicationStatus::Pending))
        .await;

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].to, "a@x.com");
    assert_eq!(attempts[1].to, "admin@rsfinanceservice.com");
    assert!(attempts[0].subject.contains("Loan Application Received"));
    assert!(attempts[1].subject.contains("New Loan Application"));
    // Amount rendered with grouping in both bodies
    assert!(attempts[0].body.contains("₹50,000"));
    assert!(attempts[1].body.contains("₹45,000"));
}

#[tokio::test]
async fn test_submission_attempts_both_emails_even_when_transport_fails() {
    let mailer = RecordingMailer::new(true);
    let notifier = notifier_with(mailer.clone());

    // Must not panic or abort after the first failure
    notifier
        .application_submitted(&sample_application(ApplicationStatus::Pending))
        .await;

    assert_eq!(mailer.attempts().len(), 2);
}

// ============================================================================
// Status-change notifications
// ============================================================================

#[tokio::test]
async fn test_status_change_email_explains_approval() {
    let mailer = RecordingMailer::new(false);
    let notifier = notifier_with(mailer.clone());

    let mut app = sample_application(ApplicationStatus::Approved);
    app.review_comments = Some("Verified income documents".to_string());
    notifier.application_status_changed(&app).await;

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].to, "a@x.com");
    assert!(attempts[0].subject.contains("Status Update"));
    assert!(attempts[0].body.contains("APPROVED"));
    assert!(attempts[0].body.contains("Congratulations"));
    assert!(attempts[0].body.contains("Comments: Verified income documents"));
}

#[tokio::test]
async fn test_status_change_email_explains_rejection() {
    let mailer = RecordingMailer::new(false);
    let notifier = notifier_with(mailer.clone());

    notifier
        .application_status_changed(&sample_application(ApplicationStatus::Rejected))
        .await;

    let attempts = mailer.attempts();
    assert!(attempts[0].body.contains("REJECTED"));
    assert!(attempts[0].body.contains("regret"));
}

// ============================================================================
// Contact message notifications
// ============================================================================

#[tokio::test]
async fn test_contact_message_sends_confirmation_and_admin_alert() {
    let mailer = RecordingMailer::new(false);
    let notifier = notifier_with(mailer.clone());

    notifier.contact_message_received(&sample_message()).await;

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].to, "ravi@example.com");
    assert_eq!(attempts[1].to, "admin@rsfinanceservice.com");
    assert!(attempts[1].subject.contains("Loan eligibility"));
    assert!(attempts[1].body.contains("Not provided"));
}

#[tokio::test]
async fn test_contact_failure_is_swallowed() {
    let mailer = RecordingMailer::new(true);
    let notifier = notifier_with(mailer.clone());

    notifier.contact_message_received(&sample_message()).await;

    assert_eq!(mailer.attempts().len(), 2);
}
