use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid JSON")]
    InvalidInput,
    #[error("configuration error: {0}")]
    Configuration(&'static str),
    #[error("failed to decode base64 audio: {0}")]
    Decoding(#[from] base64::DecodeError),
    #[error("failed to send request: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl RelayError {
    /// Wraps a reqwest failure with its whole cause chain in the message.
    pub fn transport(source: reqwest::Error) -> Self {
        let mut message = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        RelayError::Transport { message, source }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::InvalidInput => self.to_string(),
            _ => format!("Transcription failed: {self}"),
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}
