//! The `{status, message, data}` wrapper shared by every JSON response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome marker carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Response wrapper; `message` and `data` are omitted when absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// Successful envelope with only a message
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failed envelope with only a message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// An envelope paired with the status code it is sent with
#[derive(Debug)]
pub struct Reply<T> {
    pub code: StatusCode,
    pub body: Envelope<T>,
}

impl<T> Reply<T> {
    pub fn ok(body: Envelope<T>) -> Self {
        Self {
            code: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: Envelope<T>) -> Self {
        Self {
            code: StatusCode::CREATED,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_message() {
        let body = serde_json::to_value(Envelope::success(json!({"bookId": "abc"}))).unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"bookId": "abc"}}));
    }

    #[test]
    fn fail_envelope_omits_data() {
        let body = serde_json::to_value(Envelope::fail("Buku tidak ditemukan")).unwrap();
        assert_eq!(
            body,
            json!({"status": "fail", "message": "Buku tidak ditemukan"})
        );
    }

    #[test]
    fn created_reply_uses_201() {
        let reply = Reply::created(Envelope::success(1).with_message("added"));
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
