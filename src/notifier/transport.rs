// src/notifier/transport.rs
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::errors::{AppError, Result};

/// Hands a composed message to whatever actually delivers mail.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<()>;
}

/// SMTP over implicit TLS (submission port 465 by default).
#[derive(Clone)]
pub struct SmtpMailTransport {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl SmtpMailTransport {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials::new(username.to_string(), password.to_string()));
        self
    }

    fn build(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)
            .map_err(|e| AppError::MailTransport(e.to_string()))?
            .port(self.port);
        if let Some(credentials) = &self.credentials {
            builder = builder.credentials(credentials.clone());
        }
        Ok(builder.build())
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, message: Message) -> Result<()> {
        let transport = self.build()?;
        log::debug!("Connecting to SMTP relay {}:{}", self.host, self.port);
        transport
            .send(message)
            .await
            .map_err(|e| AppError::MailTransport(e.to_string()))?;
        Ok(())
    }
}
