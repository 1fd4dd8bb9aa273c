/// Mock AWS services for integration testing
use async_trait::async_trait;
use sesmail_cli::services::{Connector, RawEmailSender};
use sesmail_cli::{LogContext, RawMessage, SendOptions, SendReceipt, SesMailError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Request captured by [`MockSES`]
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub raw: Vec<u8>,
    pub options: SendOptions,
}

/// How the mock SES endpoint answers
#[derive(Debug, Clone)]
pub enum SesBehavior {
    Accept { message_id: String },
    Reject { code: Option<String>, message: String },
}

/// Mock SES client for testing
#[derive(Clone)]
pub struct MockSES {
    pub sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    behavior: Arc<Mutex<SesBehavior>>,
}

impl MockSES {
    pub fn new() -> Self {
        Self::accepting("0100018b-mock-message-id")
    }

    pub fn accepting(message_id: &str) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            behavior: Arc::new(Mutex::new(SesBehavior::Accept {
                message_id: message_id.to_string(),
            })),
        }
    }

    pub fn rejecting(code: Option<&str>, message: &str) -> Self {
        let ses = Self::new();
        *ses.behavior.lock().unwrap() = SesBehavior::Reject {
            code: code.map(str::to_string),
            message: message.to_string(),
        };
        ses
    }

    pub fn get_sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<SentEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

impl Default for MockSES {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RawEmailSender for MockSES {
    async fn send_raw_email(
        &self,
        message: &RawMessage,
        options: &SendOptions,
    ) -> Result<SendReceipt, SesMailError> {
        self.sent_emails.lock().unwrap().push(SentEmail {
            raw: message.as_bytes().to_vec(),
            options: options.clone(),
        });

        match self.behavior.lock().unwrap().clone() {
            SesBehavior::Accept { message_id } => Ok(SendReceipt {
                message_id,
                request_id: Some("mock-request-id".to_string()),
            }),
            SesBehavior::Reject { code, message } => Err(SesMailError::Send { code, message }),
        }
    }
}

/// Mock connector standing in for credential resolution
#[derive(Clone)]
pub struct MockConnector {
    pub ses: MockSES,
    connects: Arc<AtomicUsize>,
    failure: Option<fn() -> SesMailError>,
}

impl MockConnector {
    pub fn new(ses: MockSES) -> Self {
        Self {
            ses,
            connects: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    /// Connector whose credential resolution fails with `failure()`
    pub fn failing(failure: fn() -> SesMailError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(MockSES::new())
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, _log: &LogContext) -> Result<Box<dyn RawEmailSender>, SesMailError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(Box::new(self.ses.clone())),
        }
    }
}
