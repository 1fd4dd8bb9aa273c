/// JSON document accepted by `aws ses send-raw-email --raw-message file://...`
use crate::error::SesMailError;
use crate::models::RawMessage;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Serialize)]
pub struct RawJson<'a> {
    #[serde(rename = "Data")]
    pub data: Cow<'a, str>,
}

impl<'a> RawJson<'a> {
    /// Invalid UTF-8 sequences are replaced with U+FFFD
    pub fn new(message: &'a RawMessage) -> Self {
        Self {
            data: String::from_utf8_lossy(message.as_bytes()),
        }
    }
}

/// Compact single-line document, e.g. `{"Data":"Hello"}`
pub fn render_raw_json(message: &RawMessage) -> Result<String, SesMailError> {
    Ok(serde_json::to_string(&RawJson::new(message))?)
}
