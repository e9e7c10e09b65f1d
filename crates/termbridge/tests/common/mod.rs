#![allow(dead_code)]

use serde_json::{Value, json};
use termbridge::{Bridge, Fd, Method, Reply, StubBridge};

/// A host that answers every method the way a well-behaved xterm.js page would.
pub fn cooperative_host(width: i64, height: i64) -> StubBridge {
    StubBridge::new()
        .returning(Method::IsTerminal, Reply::Value(json!(true)))
        .returning(
            Method::GetSize,
            Reply::Value(json!({"width": width, "height": height})),
        )
        .on(Method::GetState, |fd, _| {
            Reply::Value(json!({"fd": fd, "raw": false}))
        })
        .on(Method::MakeRaw, |fd, _| {
            Reply::Value(json!({"fd": fd, "raw": true}))
        })
        .returning(Method::Restore, Reply::Value(Value::Null))
}

/// A plain object carrying the fields of a host error without being one.
pub fn error_shaped_object() -> Value {
    json!({"name": "Error", "message": "looks like an error"})
}

/// A bridge that fails the test if anything calls it.
#[derive(Debug, Default)]
pub struct UntouchableBridge;

impl Bridge for UntouchableBridge {
    type Value = Value;

    fn call(&self, method: Method, fd: Fd, _state: Option<&Value>) -> Reply<Value> {
        panic!("bridge must not be called: {method}({fd})");
    }
}
