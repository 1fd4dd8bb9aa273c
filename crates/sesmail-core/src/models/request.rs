/// Send request options and provider acknowledgement
use std::fmt;

/// Optional routing fields of a `SendRawEmail` request
///
/// Everything is unset by default; SES then derives the sender and
/// recipients from the message headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Envelope sender, overriding the `From:` header
    pub source: Option<String>,
    /// Identity ARN used for the `From:` address when sending on behalf of another account
    pub from_arn: Option<String>,
    /// Identity ARN used for the envelope source
    pub source_arn: Option<String>,
    /// Identity ARN used for the `Return-Path` address
    pub return_path_arn: Option<String>,
    /// Envelope recipients; empty means "use the message headers"
    pub destinations: Vec<String>,
    pub configuration_set: Option<String>,
}

impl SendOptions {
    /// Destinations in the shape the SDK builder expects
    pub fn destinations(&self) -> Option<Vec<String>> {
        (!self.destinations.is_empty()).then(|| self.destinations.clone())
    }
}

/// Successful acknowledgement returned by SES
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: String,
    pub request_id: Option<String>,
}

impl fmt::Display for SendReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ MessageId: \"{}\"", self.message_id)?;
        if let Some(request_id) = &self.request_id {
            write!(f, ", RequestId: \"{}\"", request_id)?;
        }
        write!(f, " }}")
    }
}
