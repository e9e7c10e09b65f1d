//! Numeric error codes and categories shared by every termbridge error type.

pub const BRIDGE_ERROR: i32 = -32101;
pub const PROTOCOL_ERROR: i32 = -32102;
pub const UNSUPPORTED: i32 = -32103;
pub const ALREADY_INITIALIZED: i32 = -32104;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The host reported the failure.
    External,
    /// The host answered with a value of the wrong shape.
    InvalidResponse,
    /// No host capability exists for the operation.
    Unsupported,
    /// The caller used the API out of order.
    InvalidUsage,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::External => "external",
            ErrorCategory::InvalidResponse => "invalid_response",
            ErrorCategory::Unsupported => "unsupported",
            ErrorCategory::InvalidUsage => "invalid_usage",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl std::str::FromStr for ErrorCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external" => Ok(ErrorCategory::External),
            "invalid_response" => Ok(ErrorCategory::InvalidResponse),
            "unsupported" => Ok(ErrorCategory::Unsupported),
            "invalid_usage" => Ok(ErrorCategory::InvalidUsage),
            "internal" => Ok(ErrorCategory::Internal),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn category_for_code(code: i32) -> ErrorCategory {
    match code {
        BRIDGE_ERROR => ErrorCategory::External,
        PROTOCOL_ERROR => ErrorCategory::InvalidResponse,
        UNSUPPORTED => ErrorCategory::Unsupported,
        ALREADY_INITIALIZED => ErrorCategory::InvalidUsage,
        _ => ErrorCategory::Internal,
    }
}
