use serde::{Deserialize, Serialize};

/// A short-code menu request.
///
/// `text` carries the whole selector history joined by `*` and is empty on
/// the first request of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub session_id: String,
    pub service_code: String,
    pub phone_number: String,
    /// Some aggregators omit `text` on the first request; absent means "".
    #[serde(default)]
    pub text: String,
}

/// Reply to a [`SessionRequest`]. `response` starts with `CON ` or `END `.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub service_code: String,
    pub phone_number: String,
    pub response: String,
}

/// A freeform inbound short message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRequest {
    pub from: String,
    pub to: String,
    pub text: String,
}

/// Reply to a [`MessageRequest`], addressed back to its sender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub to: String,
    pub from: String,
    pub text: String,
}
