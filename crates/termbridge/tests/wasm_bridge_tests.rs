//! JavaScript bridge tests
//!
//! Runs under `wasm-bindgen-test`; builds bridge objects with real JS values
//! so error classification uses the host's `Error` constructor.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Object, Reflect};
use termbridge::{Adapter, JsBridge, Method, TermError};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

fn bridge_with(methods: &[(&str, &str, &str)]) -> JsBridge {
    let object = Object::new();
    for (name, args, body) in methods {
        let function = Function::new_with_args(args, body);
        Reflect::set(&object, &JsValue::from_str(name), &function).unwrap();
    }
    JsBridge::from_object("termbridge", object.into())
}

#[wasm_bindgen_test]
fn get_size_reads_width_and_height() {
    let adapter = Adapter::new(bridge_with(&[(
        "getSize",
        "fd",
        "return { width: 80, height: 24 };",
    )]));
    assert_eq!(adapter.size(0), Ok((80, 24)));
}

#[wasm_bindgen_test]
fn returned_error_instance_is_bridge_error() {
    let adapter = Adapter::new(bridge_with(&[(
        "getState",
        "fd",
        "return new Error('fd ' + fd + ' is closed');",
    )]));
    assert_eq!(
        adapter.get_state(3).unwrap_err(),
        TermError::Bridge {
            method: Method::GetState,
            message: "fd 3 is closed".into()
        }
    );
}

#[wasm_bindgen_test]
fn error_subclass_is_bridge_error() {
    let adapter = Adapter::new(bridge_with(&[(
        "makeRaw",
        "fd",
        "return new TypeError('raw mode unavailable');",
    )]));
    assert!(matches!(
        adapter.make_raw(0),
        Err(TermError::Bridge { method: Method::MakeRaw, .. })
    ));
}

#[wasm_bindgen_test]
fn thrown_error_is_bridge_error() {
    let adapter = Adapter::new(bridge_with(&[(
        "getSize",
        "fd",
        "throw new Error('detached');",
    )]));
    assert_eq!(
        adapter.size(0).unwrap_err(),
        TermError::Bridge {
            method: Method::GetSize,
            message: "detached".into()
        }
    );
}

#[wasm_bindgen_test]
fn error_shaped_object_is_success_value() {
    let adapter = Adapter::new(bridge_with(&[
        ("makeRaw", "fd", "return { name: 'Error', message: 'nope' };"),
        (
            "restore",
            "fd, state",
            "if (state.message !== 'nope') { return new Error('wrong state'); }",
        ),
    ]));
    let state = adapter.make_raw(0).unwrap();
    assert_eq!(adapter.restore(0, &state), Ok(()));
}

#[wasm_bindgen_test]
fn restore_receives_the_same_object() {
    let adapter = Adapter::new(bridge_with(&[
        ("makeRaw", "fd", "this.last = { fd: fd }; return this.last;"),
        (
            "restore",
            "fd, state",
            "if (state !== this.last) { return new Error('foreign state'); }",
        ),
    ]));
    let state = adapter.make_raw(7).unwrap();
    assert_eq!(adapter.restore(7, &state), Ok(()));
}

#[wasm_bindgen_test]
fn missing_method_is_bridge_error_except_is_terminal() {
    let adapter = Adapter::new(bridge_with(&[]));
    assert!(!adapter.is_terminal(0));
    let err = adapter.get_state(0).unwrap_err();
    assert!(err.to_string().contains("getState is not a function"));
}

#[wasm_bindgen_test]
fn absent_bridge_object() {
    let adapter = Adapter::new(JsBridge::from_object("termbridge", JsValue::UNDEFINED));
    assert!(!adapter.is_terminal(0));
    assert!(matches!(adapter.size(0), Err(TermError::Bridge { .. })));
    assert!(matches!(
        adapter.read_password(0),
        Err(TermError::Unsupported { .. })
    ));
}

#[wasm_bindgen_test]
fn size_requires_numeric_fields() {
    let adapter = Adapter::new(bridge_with(&[(
        "getSize",
        "fd",
        "return { width: '80', height: 24 };",
    )]));
    assert!(matches!(adapter.size(0), Err(TermError::Protocol { .. })));
}

#[wasm_bindgen_test]
fn is_terminal_uses_truthiness() {
    let adapter = Adapter::new(bridge_with(&[("isTerminal", "fd", "return fd === 1 ? 1 : '';")]));
    assert!(adapter.is_terminal(1));
    assert!(!adapter.is_terminal(2));
}

#[wasm_bindgen_test]
fn free_functions_use_global_bridge_object() {
    let bridge = Object::new();
    let get_size = Function::new_with_args("fd", "return { width: 132, height: 43 };");
    Reflect::set(&bridge, &JsValue::from_str("getSize"), &get_size).unwrap();
    Reflect::set(&js_sys::global(), &JsValue::from_str("termbridge"), &bridge).unwrap();

    assert_eq!(termbridge::get_size(0), Ok((132, 43)));
    assert!(!termbridge::is_terminal(0));
    assert!(termbridge::read_password(0).is_err());
    assert_eq!(
        termbridge::install(&termbridge::BridgeConfig::default()),
        Err(TermError::AlreadyInitialized)
    );
}

#[wasm_bindgen_test]
fn env_config_falls_back_to_default_without_environment() {
    assert_eq!(
        termbridge::BridgeConfig::from_env(),
        termbridge::BridgeConfig::default()
    );
}
