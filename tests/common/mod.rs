// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use lettre::Message;
use mealmail::config::MailConfig;
use mealmail::errors::{AppError, Result};
use mealmail::notifier::MailTransport;
use std::sync::Mutex;

/// Keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<Message>>,
}

impl RecordingTransport {
    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_body(&self) -> String {
        let sent = self.sent.lock().unwrap();
        String::from_utf8(sent.last().expect("no message sent").formatted()).unwrap()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: Message) -> Result<()> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Always fails like an unreachable SMTP relay.
pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _message: Message) -> Result<()> {
        Err(AppError::MailTransport(
            "Connection refused (os error 111)".to_string(),
        ))
    }
}

pub fn no_credentials() -> MailConfig {
    MailConfig {
        sender_email: None,
        sender_password: None,
        fallback_recipient: None,
        smtp_host: "smtp.example.com".to_string(),
        smtp_port: 465,
    }
}

pub fn with_credentials() -> MailConfig {
    MailConfig {
        sender_email: Some("chef@example.com".to_string()),
        sender_password: Some("app-password".to_string()),
        ..no_credentials()
    }
}
