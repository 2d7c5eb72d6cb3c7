// src/notifier/mod.rs
//! Email notification for finished recipes.
//!
//! The notifier composes a plain-text message and hands it to a
//! [`MailTransport`]. Without sender credentials or a recipient it does not
//! touch the transport at all and reports a simulated send instead, so the
//! pipeline keeps working in environments that have no mail account.

pub mod transport;

use lettre::Message;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use std::sync::Arc;

use crate::config::MailConfig;
use crate::errors::{AppError, Result};
use crate::models::DeliveryResult;

pub use transport::{MailTransport, SmtpMailTransport};

pub struct Notifier {
    config: MailConfig,
    transport: Arc<dyn MailTransport>,
}

impl Notifier {
    pub fn new(config: &MailConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            config: config.clone(),
            transport,
        }
    }

    /// Notifier that delivers through the configured SMTP relay.
    pub fn from_config(config: &MailConfig) -> Self {
        let mut smtp = SmtpMailTransport::new(&config.smtp_host, config.smtp_port);
        if let (Some(user), Some(password)) = (&config.sender_email, &config.sender_password) {
            smtp = smtp.with_credentials(user, password);
        }
        Self::new(config, Arc::new(smtp))
    }

    /// Explicit recipient when non-empty, otherwise the configured fallback.
    pub fn resolve_recipient(&self, recipient: Option<&str>) -> Option<String> {
        recipient
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.fallback_recipient.clone())
    }

    pub async fn send(
        &self,
        subject: &str,
        body: &str,
        recipient: Option<&str>,
    ) -> Result<DeliveryResult> {
        let to = self.resolve_recipient(recipient);

        let (sender, to) = match (
            self.config.sender_email.as_deref(),
            self.config.sender_password.as_deref(),
            to,
        ) {
            (Some(sender), Some(_), Some(to)) => (sender, to),
            (_, _, to) => {
                let to = to.unwrap_or_else(|| "<no recipient>".to_string());
                log::warn!("Missing email configuration/recipient. Simulating success.");
                return Ok(DeliveryResult::simulated(format!(
                    "Simulated: Email composed successfully for {} with subject: {}",
                    to, subject
                )));
            }
        };

        let message = compose(sender, &to, subject, body)?;

        if let Err(e) = self.transport.send(message).await {
            log::error!("Failed to send mail via SMTP: {}", e);
            return Err(match e {
                AppError::MailTransport(_) => e,
                other => AppError::MailTransport(other.to_string()),
            });
        }

        log::info!("Email sent to {}", to);
        Ok(DeliveryResult::delivered(format!(
            "Email sent successfully to {}",
            to
        )))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address.parse().map_err(|e: lettre::address::AddressError| AppError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

fn compose(from: &str, to: &str, subject: &str, body: &str) -> Result<Message> {
    Message::builder()
        .from(parse_mailbox(from)?)
        .to(parse_mailbox(to)?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .map_err(|e| AppError::MailBuild(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, message: Message) -> Result<()> {
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MailTransport for FailingTransport {
        async fn send(&self, _message: Message) -> Result<()> {
            Err(AppError::MailTransport(
                "connection refused by smtp.example.com:465".to_string(),
            ))
        }
    }

    fn mail_config(sender: Option<&str>, password: Option<&str>, fallback: Option<&str>) -> MailConfig {
        MailConfig {
            sender_email: sender.map(str::to_string),
            sender_password: password.map(str::to_string),
            fallback_recipient: fallback.map(str::to_string),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_simulate() {
        let transport = Arc::new(RecordingTransport::default());
        let notifier = Notifier::new(&mail_config(None, None, None), transport.clone());

        let result = notifier
            .send("Your Personalized Recipe: Toast", "body", Some("eater@example.com"))
            .await
            .unwrap();

        assert_eq!(result.status, DeliveryStatus::Simulated);
        assert_eq!(
            result.detail,
            "Simulated: Email composed successfully for eater@example.com with subject: Your Personalized Recipe: Toast"
        );
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_credentials_simulate() {
        let configs = [
            mail_config(Some("chef@example.com"), None, Some("manager@example.com")),
            mail_config(None, Some("secret"), Some("manager@example.com")),
        ];

        for config in configs {
            let transport = Arc::new(RecordingTransport::default());
            let notifier = Notifier::new(&config, transport.clone());

            let result = notifier
                .send("Subject", "body", Some("eater@example.com"))
                .await
                .unwrap();

            assert_eq!(result.status, DeliveryStatus::Simulated);
            assert!(result.detail.contains("eater@example.com"));
            assert!(transport.sent.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_no_recipient_and_no_fallback_simulates() {
        let transport = Arc::new(RecordingTransport::default());
        let config = mail_config(Some("chef@example.com"), Some("secret"), None);
        let notifier = Notifier::new(&config, transport.clone());

        let result = notifier.send("Subject", "body", Some("  ")).await.unwrap();

        assert_eq!(result.status, DeliveryStatus::Simulated);
        assert!(result.detail.contains("<no recipient>"));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_recipient_is_used() {
        let transport = Arc::new(RecordingTransport::default());
        let config = mail_config(
            Some("chef@example.com"),
            Some("secret"),
            Some("manager@example.com"),
        );
        let notifier = Notifier::new(&config, transport.clone());

        let result = notifier.send("Dinner is ready", "Enjoy.", None).await.unwrap();

        assert_eq!(result.status, DeliveryStatus::Delivered);
        assert_eq!(result.detail, "Email sent successfully to manager@example.com");

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let envelope = sent[0].envelope();
        assert_eq!(envelope.from().unwrap().to_string(), "chef@example.com");
        assert_eq!(envelope.to()[0].to_string(), "manager@example.com");
        let raw = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(raw.contains("Subject: Dinner is ready"));
        assert!(raw.contains("Content-Type: text/plain"));
    }

    #[tokio::test]
    async fn test_explicit_recipient_wins_over_fallback() {
        let transport = Arc::new(RecordingTransport::default());
        let config = mail_config(
            Some("chef@example.com"),
            Some("secret"),
            Some("manager@example.com"),
        );
        let notifier = Notifier::new(&config, transport.clone());

        notifier.send("Hi", "body", Some("eater@example.com")).await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0].envelope().to()[0].to_string(), "eater@example.com");
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let config = mail_config(Some("chef@example.com"), Some("secret"), None);
        let notifier = Notifier::new(&config, Arc::new(FailingTransport));

        let err = notifier
            .send("Hi", "body", Some("eater@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MailTransport(_)));
        let message = err.to_string();
        assert!(message.starts_with("failed to send mail: "));
        assert!(message.contains("connection refused by smtp.example.com:465"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_address_is_an_error() {
        let transport = Arc::new(RecordingTransport::default());
        let config = mail_config(Some("chef@example.com"), Some("secret"), None);
        let notifier = Notifier::new(&config, transport.clone());

        let err = notifier.send("Hi", "body", Some("not an address")).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidAddress { .. }));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
