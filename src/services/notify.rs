//! Contact notification queue
//!
//! Submission handlers enqueue a [`ContactNotification`] and return without
//! waiting on SMTP. A single worker task drains the queue and sends email.
//! Every failure mode here (full queue, send error, no SMTP configured) is
//! logged and never reaches the HTTP response of the triggering request.

use tokio::sync::mpsc;

use crate::domain::ContactSubmission;
use crate::services::Mailer;

/// Bounded queue depth; contact-form traffic is low, so a small buffer is
/// plenty and a full queue only ever drops notifications, not submissions.
const QUEUE_CAPACITY: usize = 64;

/// The fields of a submission carried into the notification email.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: String,
    pub message: String,
}

impl ContactNotification {
    pub fn render_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nProject type: {}\n\n{}",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or("-"),
            self.project_type,
            self.message,
        )
    }
}

impl From<&ContactSubmission> for ContactNotification {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            project_type: submission.project_type.clone(),
            message: submission.message.clone(),
        }
    }
}

/// Cloneable handle held in application state.
#[derive(Clone)]
pub struct NotificationSender {
    tx: mpsc::Sender<ContactNotification>,
}

impl NotificationSender {
    /// Hand a notification to the worker. Never blocks; a full queue is
    /// logged and the notification dropped.
    pub fn enqueue(&self, notification: ContactNotification) {
        if let Err(e) = self.tx.try_send(notification) {
            tracing::warn!(error = %e, "Notification queue full, dropping contact notification");
        }
    }
}

/// Spawn the worker task and return the sender half.
///
/// With no mailer configured the worker still drains the queue, logging each
/// submission instead of sending email.
pub fn spawn_notification_worker(mailer: Option<Mailer>) -> NotificationSender {
    let (tx, mut rx) = mpsc::channel::<ContactNotification>(QUEUE_CAPACITY);

    tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            match &mailer {
                Some(mailer) => {
                    if let Err(e) = mailer.send_contact_notification(&notification).await {
                        tracing::warn!(
                            error = %e,
                            contact_email = %notification.email,
                            "Failed to send contact notification email"
                        );
                    }
                }
                None => {
                    tracing::info!(
                        contact_email = %notification.email,
                        "SMTP not configured, contact notification logged only"
                    );
                }
            }
        }
        tracing::debug!("Notification queue closed, worker exiting");
    });

    NotificationSender { tx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_body_includes_all_fields() {
        let notification = ContactNotification {
            name: "Ana Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("+34 600 000 000".to_string()),
            project_type: "Residential".to_string(),
            message: "Two-bedroom flat renovation.".to_string(),
        };
        let body = notification.render_body();
        assert!(body.contains("Ana Ruiz"));
        assert!(body.contains("ana@example.com"));
        assert!(body.contains("+34 600 000 000"));
        assert!(body.contains("Residential"));
        assert!(body.contains("Two-bedroom flat renovation."));
    }

    #[test]
    fn render_body_marks_missing_phone() {
        let notification = ContactNotification {
            name: "Ana Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            project_type: "Commercial".to_string(),
            message: "Office refit.".to_string(),
        };
        assert!(notification.render_body().contains("Phone: -"));
    }

    #[tokio::test]
    async fn enqueue_without_mailer_does_not_error() {
        let sender = spawn_notification_worker(None);
        sender.enqueue(ContactNotification {
            name: "Ana Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            project_type: "Residential".to_string(),
            message: "Hello".to_string(),
        });
        // The worker drains the queue in the background; nothing to assert
        // beyond "enqueue is fire-and-forget and does not panic".
    }
}
