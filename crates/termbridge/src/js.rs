//! Passthrough for JavaScript hosts running a terminal emulator such as xterm.js.
//!
//! The host publishes the bridge object before the module starts:
//!
//! ```js
//! globalThis.termbridge = {
//!   isTerminal: (fd) => true,
//!   getSize: (fd) => ({ width: term.cols, height: term.rows }),
//!   getState: (fd) => ({ raw: false }),
//!   makeRaw: (fd) => ({ raw: true }),
//!   restore: (fd, state) => {},
//! };
//! ```
//!
//! Unused functions can be omitted; the matching operations then fail.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::adapter::Adapter;
use crate::cell::BridgeCell;
use crate::config::BridgeConfig;
use crate::error::TermError;
use crate::host::{Bridge, Fd, HostError, HostValue, Method, Reply};
use crate::state::State;
use crate::Result;

pub type JsState = State<JsValue>;

/// The bridge object found on `globalThis`.
#[derive(Debug, Clone)]
pub struct JsBridge {
    global_key: String,
    object: JsValue,
}

impl JsBridge {
    /// Resolves `globalThis[config.global_key]`. A missing object is not an
    /// error here; calls through it fail instead.
    pub fn lookup(config: &BridgeConfig) -> Self {
        let object = Reflect::get(&js_sys::global(), &JsValue::from_str(&config.global_key))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_object(config.global_key.clone(), object)
    }

    pub fn from_object(global_key: impl Into<String>, object: JsValue) -> Self {
        Self {
            global_key: global_key.into(),
            object,
        }
    }

    pub fn is_present(&self) -> bool {
        !self.object.is_undefined() && !self.object.is_null()
    }

    fn method(&self, method: Method) -> std::result::Result<Function, HostError> {
        if !self.is_present() {
            return Err(HostError::missing_bridge(&self.global_key, method));
        }
        Reflect::get(&self.object, &JsValue::from_str(method.as_str()))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| HostError::not_a_function(&self.global_key, method))
    }
}

/// Converts a host value into a reply. Only real `Error` instances count as
/// errors; an object that merely looks like one is a success value.
fn classify(value: JsValue) -> Reply<JsValue> {
    if value.is_instance_of::<js_sys::Error>() {
        let message: String = value.unchecked_ref::<js_sys::Error>().message().into();
        Reply::Error(HostError::new(message))
    } else {
        Reply::Value(value)
    }
}

fn thrown(value: JsValue) -> HostError {
    if value.is_instance_of::<js_sys::Error>() {
        HostError::new(String::from(value.unchecked_ref::<js_sys::Error>().message()))
    } else {
        HostError::new(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl Bridge for JsBridge {
    type Value = JsValue;

    fn call(&self, method: Method, fd: Fd, state: Option<&JsValue>) -> Reply<JsValue> {
        let function = match self.method(method) {
            Ok(function) => function,
            Err(err) => return Reply::Error(err),
        };
        let fd = JsValue::from(fd);
        let result = match state {
            Some(state) => function.call2(&self.object, &fd, state),
            None => function.call1(&self.object, &fd),
        };
        match result {
            Ok(value) => classify(value),
            Err(exception) => Reply::Error(thrown(exception)),
        }
    }
}

impl HostValue for JsValue {
    fn is_truthy(&self) -> bool {
        JsValue::is_truthy(self)
    }

    fn is_object_like(&self) -> bool {
        JsValue::is_object(self) && !self.is_function()
    }

    fn number_field(&self, name: &str) -> Option<f64> {
        Reflect::get(self, &JsValue::from_str(name)).ok()?.as_f64()
    }
}

thread_local! {
    static BRIDGE: BridgeCell<Adapter<JsBridge>> = const { BridgeCell::new() };
}

/// Selects the bridge object before the first terminal call. Fails once the
/// bridge has been resolved.
pub fn install(config: &BridgeConfig) -> Result<()> {
    let adapter = Adapter::new(JsBridge::lookup(config));
    BRIDGE.with(|cell| cell.set(adapter))
}

fn with_adapter<R>(f: impl FnOnce(&Adapter<JsBridge>) -> R) -> R {
    BRIDGE.with(|cell| {
        f(cell.get_or_init(|| Adapter::new(JsBridge::lookup(&BridgeConfig::from_env()))))
    })
}

pub fn is_terminal(fd: Fd) -> bool {
    with_adapter(|adapter| adapter.is_terminal(fd))
}

pub fn get_size(fd: Fd) -> Result<(i32, i32)> {
    with_adapter(|adapter| adapter.size(fd))
}

pub fn get_state(fd: Fd) -> Result<JsState> {
    with_adapter(|adapter| adapter.get_state(fd))
}

pub fn make_raw(fd: Fd) -> Result<JsState> {
    with_adapter(|adapter| adapter.make_raw(fd))
}

pub fn restore(fd: Fd, state: &JsState) -> Result<()> {
    with_adapter(|adapter| adapter.restore(fd, state))
}

/// Always fails. Does not resolve the bridge, so [`install`] still works
/// afterwards.
pub fn read_password(_fd: Fd) -> Result<Vec<u8>> {
    Err(TermError::unsupported("read_password"))
}

/// Enters raw mode on `fd`, restoring when `f` returns.
pub fn with_raw_mode<R>(fd: Fd, f: impl FnOnce() -> R) -> Result<R> {
    with_adapter(|adapter| adapter.with_raw_mode(fd, f))
}
