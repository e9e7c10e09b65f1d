//! Terminal bridge errors with structured context.
//!
//! Every failure is returned to the caller as-is; nothing in this crate
//! retries or recovers locally.

use serde_json::{Value, json};
use termbridge_common::error_codes::{self, ErrorCategory};
use thiserror::Error;

use crate::host::{HostError, Method};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TermError {
    /// The host reported an error, including a missing method or bridge object.
    #[error("bridge call {method} failed: {message}")]
    Bridge { method: Method, message: String },

    /// The host answered with a value of the wrong shape.
    #[error("bridge call {method} returned an invalid value: {reason}")]
    Protocol { method: Method, reason: String },

    /// No host capability exists for the operation.
    #[error("terminal: {operation} not implemented on {platform}")]
    Unsupported {
        operation: &'static str,
        platform: String,
    },

    #[error("terminal bridge is already initialized")]
    AlreadyInitialized,
}

impl TermError {
    pub(crate) fn bridge(method: Method, err: HostError) -> Self {
        TermError::Bridge {
            method,
            message: err.message,
        }
    }

    pub(crate) fn protocol(method: Method, reason: impl Into<String>) -> Self {
        TermError::Protocol {
            method,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        TermError::Unsupported {
            operation,
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            TermError::Bridge { .. } => error_codes::BRIDGE_ERROR,
            TermError::Protocol { .. } => error_codes::PROTOCOL_ERROR,
            TermError::Unsupported { .. } => error_codes::UNSUPPORTED,
            TermError::AlreadyInitialized => error_codes::ALREADY_INITIALIZED,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        error_codes::category_for_code(self.code())
    }

    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        match self {
            TermError::Bridge { method, message } => json!({
                "operation": method.as_str(),
                "message": message
            }),
            TermError::Protocol { method, reason } => json!({
                "operation": method.as_str(),
                "reason": reason
            }),
            TermError::Unsupported {
                operation,
                platform,
            } => json!({
                "operation": operation,
                "platform": platform
            }),
            TermError::AlreadyInitialized => json!({
                "operation": "install"
            }),
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            TermError::Bridge { method, message } => {
                if message.contains("not a function") || message.contains("no bridge object") {
                    format!(
                        "The host bridge object does not provide {method}. \
                         Expose it on the bridge to enable this operation."
                    )
                } else {
                    "The host rejected the call. Check the host terminal's console for details."
                        .to_string()
                }
            }
            TermError::Protocol { method, .. } => match method {
                Method::GetSize => {
                    "getSize(fd) must return an object with numeric width and height properties."
                        .to_string()
                }
                _ => format!("Check the value the host returns from {method}."),
            },
            TermError::Unsupported { .. } => {
                "This host has no secure line input. Read input through the host terminal instead."
                    .to_string()
            }
            TermError::AlreadyInitialized => {
                "Install the bridge configuration before the first terminal call.".to_string()
            }
        }
    }

    /// Bridge calls are synchronous and deterministic, so none are retried.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            TermError::Bridge { method, .. } | TermError::Protocol { method, .. } => {
                method.as_str()
            }
            TermError::Unsupported { operation, .. } => *operation,
            TermError::AlreadyInitialized => "install",
        }
    }
}
