//! Service layer modules for external integrations.
//!
//! Contains the SMTP mailer and the notification queue that decouples
//! contact-form email dispatch from the request/response cycle.

pub mod mailer;
pub mod notify;

pub use mailer::Mailer;
pub use notify::{spawn_notification_worker, ContactNotification, NotificationSender};
