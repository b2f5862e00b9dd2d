//! Plain-text email templates for lifecycle notifications

use crate::application::{ApplicationStatus, LoanApplication};
use crate::contact::ContactMessage;

use super::mailer::OutboundEmail;

/// Render an amount in rupees with thousands grouping, e.g. `₹50,000`.
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Human-readable explanation attached to a status-change notification.
pub fn status_explanation(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Approved => {
            "Congratulations! Your loan application has been approved. \
             Our team will contact you soon with the next steps."
        }
        ApplicationStatus::Rejected => {
            "We regret to inform you that your loan application has been rejected. \
             Please contact us for more details."
        }
        ApplicationStatus::UnderReview => {
            "Your application is currently under review. \
             We will update you once the review is complete."
        }
        ApplicationStatus::Pending => "Your application status has been updated.",
    }
}

/// Confirmation sent to the applicant after submission.
pub fn application_confirmation(app: &LoanApplication) -> OutboundEmail {
    OutboundEmail {
        to: app.email.clone(),
        subject: format!("Loan Application Received - {}", app.application_id),
        body: format!(
            "Dear {} {},\n\n\
             Thank you for applying for a loan with RS Finance Service.\n\n\
             Your application details:\n\
             Application ID: {}\n\
             Loan Type: {}\n\
             Loan Amount: {}\n\
             Status: {}\n\n\
             We will review your application and contact you within 24-48 hours.\n\n\
             For any queries, please contact us at:\n\
             Phone: 8391808557\n\
             Email: info@rsfinanceservice.com\n\n\
             Best regards,\n\
             RS Finance Service Team",
            app.first_name,
            app.last_name,
            app.application_id,
            app.loan_type,
            format_inr(app.loan_amount),
            app.status.as_str(),
        ),
    }
}

/// Alert sent to the admin address after a new submission.
pub fn new_application_alert(app: &LoanApplication, admin_email: &str) -> OutboundEmail {
    OutboundEmail {
        to: admin_email.to_string(),
        subject: format!("New Loan Application - {}", app.application_id),
        body: format!(
            "A new loan application has been submitted.\n\n\
             Application Details:\n\
             Application ID: {}\n\
             Applicant: {} {}\n\
             Email: {}\n\
             Phone: {}\n\
             Loan Type: {}\n\
             Loan Amount: {}\n\
             Monthly Income: {}\n\
             Employment Type: {}\n\n\
             Please review the application in the admin dashboard.\n\n\
             RS Finance Service System",
            app.application_id,
            app.first_name,
            app.last_name,
            app.email,
            app.phone,
            app.loan_type,
            format_inr(app.loan_amount),
            format_inr(app.monthly_income),
            app.employment_type,
        ),
    }
}

/// Status-change notification sent to the applicant after review.
pub fn status_update(app: &LoanApplication) -> OutboundEmail {
    let comments = match &app.review_comments {
        Some(c) => format!("Comments: {}", c),
        None => String::new(),
    };

    OutboundEmail {
        to: app.email.clone(),
        subject: format!("Loan Application Status Update - {}", app.application_id),
        body: format!(
            "Dear {} {},\n\n\
             Your loan application status has been updated.\n\n\
             Application ID: {}\n\
             New Status: {}\n\n\
             {}\n\n\
             {}\n\n\
             For any queries, please contact us at:\n\
             Phone: 8391808557\n\
             Email: info@rsfinanceservice.com\n\n\
             Best regards,\n\
             RS Finance Service Team",
            app.first_name,
            app.last_name,
            app.application_id,
            app.status.as_str(),
            status_explanation(app.status),
            comments,
        ),
    }
}

/// Confirmation sent to a contact-form sender.
pub fn contact_confirmation(message: &ContactMessage) -> OutboundEmail {
    OutboundEmail {
        to: message.email.clone(),
        subject: "Message Received - RS Finance Service".to_string(),
        body: format!(
            "Dear {},\n\n\
             Thank you for contacting RS Finance Service.\n\n\
             We have received your message regarding: {}\n\n\
             Our team will review your message and get back to you within 24 hours.\n\n\
             For urgent matters, please call us at: 8391808557\n\n\
             Best regards,\n\
             RS Finance Service Team",
            message.name, message.subject,
        ),
    }
}

/// Alert sent to the admin address when a contact message arrives.
pub fn contact_alert(message: &ContactMessage, admin_email: &str) -> OutboundEmail {
    OutboundEmail {
        to: admin_email.to_string(),
        subject: format!("New Contact Message - {}", message.subject),
        body: format!(
            "A new contact message has been received.\n\n\
             From: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n\n\
             Please respond to the customer.\n\n\
             RS Finance Service System",
            message.name,
            message.email,
            message.phone.as_deref().unwrap_or("Not provided"),
            message.subject,
            message.message,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(50_000), "₹50,000");
        assert_eq!(format_inr(1_234_567), "₹1,234,567");
        assert_eq!(format_inr(-2_500), "-₹2,500");
    }

    #[test]
    fn test_status_explanations() {
        assert!(status_explanation(ApplicationStatus::Approved).contains("Congratulations"));
        assert!(status_explanation(ApplicationStatus::Rejected).contains("regret"));
        assert!(status_explanation(ApplicationStatus::UnderReview).contains("under review"));
        assert!(status_explanation(ApplicationStatus::Pending).contains("updated"));
    }
}
