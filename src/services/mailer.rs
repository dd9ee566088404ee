//! SMTP mailer for contact notifications
//!
//! Wraps the `lettre` async SMTP transport. The transport is built once at
//! startup and reused for every send.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::config::SmtpSettings;
use crate::services::notify::ContactNotification;

#[derive(Debug, Error)]
pub enum MailerError {
    /// SMTP transport-level failure (authentication, connection, etc.)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),
}

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl Mailer {
    pub fn new(smtp: &SmtpSettings, to_address: String) -> Result<Self, MailerError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?.port(smtp.port);

        if let (Some(user), Some(pass)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: smtp.from_address.clone(),
            to_address,
        })
    }

    /// Send a plain-text notification email for one contact submission.
    pub async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), MailerError> {
        let subject = format!("New contact enquiry from {}", notification.name);
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(self.to_address.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(notification.render_body())
            .map_err(|e| MailerError::Build(e.to_string()))?;

        self.transport.send(email).await?;

        tracing::info!(
            to = %self.to_address,
            contact_email = %notification.email,
            "Contact notification email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_display() {
        let err = MailerError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn address_error_display() {
        let parsed: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailerError::Address(parsed.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
