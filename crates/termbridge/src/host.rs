//! The contract between the adapter and the host's bridge object.
//!
//! A bridge object lives at a fixed key on the host's global namespace and
//! exposes up to five methods:
//!
//! ```text
//! isTerminal(fd)     => bool
//! getSize(fd)        => { width, height } | Error
//! getState(fd)       => opaque | Error
//! makeRaw(fd)        => opaque | Error
//! restore(fd, state) => any | Error
//! ```
//!
//! Any of them may be omitted. Every implementation of [`Bridge`] classifies
//! the raw host return value into a [`Reply`] immediately after the call, so
//! nothing past this module ever has to ask whether a value is an error.

use std::fmt;

/// Host-defined terminal stream descriptor.
pub type Fd = i32;

/// A method on the bridge object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    IsTerminal,
    GetSize,
    GetState,
    MakeRaw,
    Restore,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::IsTerminal,
        Method::GetSize,
        Method::GetState,
        Method::MakeRaw,
        Method::Restore,
    ];

    /// The property name the host exposes this method under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::IsTerminal => "isTerminal",
            Method::GetSize => "getSize",
            Method::GetState => "getState",
            Method::MakeRaw => "makeRaw",
            Method::Restore => "restore",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error value produced by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure a host reports when `method` is not callable on the bridge object.
    pub fn not_a_function(global_key: &str, method: Method) -> Self {
        Self::new(format!("{global_key}.{method} is not a function"))
    }

    /// The failure a host reports when there is no bridge object to call `method` on.
    pub fn missing_bridge(global_key: &str, method: Method) -> Self {
        Self::new(format!(
            "cannot call {method}: no bridge object at globalThis[\"{global_key}\"]"
        ))
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A classified host return value.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<V> {
    Value(V),
    Error(HostError),
}

impl<V> Reply<V> {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    pub fn into_result(self) -> Result<V, HostError> {
        match self {
            Reply::Value(value) => Ok(value),
            Reply::Error(err) => Err(err),
        }
    }
}

/// What the adapter may ask of a host value. Nothing else about a value is
/// ever inspected.
pub trait HostValue: Clone + fmt::Debug {
    /// Host truthiness.
    fn is_truthy(&self) -> bool;

    /// True for object-like values. Null and functions are not object-like.
    fn is_object_like(&self) -> bool;

    /// The field `name` if present and numeric.
    fn number_field(&self, name: &str) -> Option<f64>;
}

/// A host bridge object.
pub trait Bridge {
    type Value: HostValue;

    /// Invokes `method` with `fd` and, for [`Method::Restore`], the state
    /// value. Missing methods and a missing bridge object come back as
    /// [`Reply::Error`].
    fn call(&self, method: Method, fd: Fd, state: Option<&Self::Value>) -> Reply<Self::Value>;
}

impl<B: Bridge + ?Sized> Bridge for &B {
    type Value = B::Value;

    fn call(&self, method: Method, fd: Fd, state: Option<&Self::Value>) -> Reply<Self::Value> {
        (**self).call(method, fd, state)
    }
}
