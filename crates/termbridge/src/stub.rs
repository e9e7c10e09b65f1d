//! An in-process bridge object backed by `serde_json` values.
//!
//! A test double for code that sits on top of the adapter without a browser
//! host. Handlers are registered per method; unregistered methods fail the
//! same way a host does when the property is not callable. Every call is
//! recorded until [`StubBridge::clear_calls`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::config::DEFAULT_GLOBAL_KEY;
use crate::host::{Bridge, Fd, HostError, HostValue, Method, Reply};

type Handler = Box<dyn Fn(Fd, Option<&Value>) -> Reply<Value>>;

/// One recorded invocation of the stub.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub fd: Fd,
    pub state: Option<Value>,
}

pub struct StubBridge {
    global_key: String,
    present: bool,
    handlers: HashMap<Method, Handler>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl Default for StubBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StubBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.handlers.keys().map(Method::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("StubBridge")
            .field("global_key", &self.global_key)
            .field("present", &self.present)
            .field("methods", &methods)
            .field("calls", &self.calls.borrow().len())
            .finish()
    }
}

impl StubBridge {
    /// A bridge object with no methods.
    pub fn new() -> Self {
        Self {
            global_key: DEFAULT_GLOBAL_KEY.to_string(),
            present: true,
            handlers: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// No bridge object at all on the global namespace.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    pub fn with_global_key(mut self, key: impl Into<String>) -> Self {
        self.global_key = key.into();
        self
    }

    pub fn on<F>(mut self, method: Method, handler: F) -> Self
    where
        F: Fn(Fd, Option<&Value>) -> Reply<Value> + 'static,
    {
        self.handlers.insert(method, Box::new(handler));
        self
    }

    /// Registers a handler that always replies with `reply`.
    pub fn returning(self, method: Method, reply: Reply<Value>) -> Self {
        self.on(method, move |_, _| reply.clone())
    }

    /// Every invocation so far, in call order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Forgets the recorded calls.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn call_count(&self, method: Method) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }
}

impl Bridge for StubBridge {
    type Value = Value;

    fn call(&self, method: Method, fd: Fd, state: Option<&Value>) -> Reply<Value> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            fd,
            state: state.cloned(),
        });

        if !self.present {
            return Reply::Error(HostError::missing_bridge(&self.global_key, method));
        }
        match self.handlers.get(&method) {
            Some(handler) => handler(fd, state),
            None => Reply::Error(HostError::not_a_function(&self.global_key, method)),
        }
    }
}

impl HostValue for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn is_object_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    fn number_field(&self, name: &str) -> Option<f64> {
        self.as_object()?.get(name)?.as_f64()
    }
}
