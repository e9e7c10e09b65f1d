#![deny(clippy::all)]

//! Terminal control for JavaScript hosts that have no terminal device.
//!
//! Every operation is relayed to a bridge object the host publishes on its
//! global namespace; see [`host`] for the contract. [`Adapter`] works with any
//! [`Bridge`]. On `wasm32` the [`js`] module adds free functions backed by the
//! browser's bridge object, resolved once per process.

pub mod adapter;
pub mod cell;
pub mod config;
pub mod error;
pub mod host;
mod state;
pub mod stub;

#[cfg(target_arch = "wasm32")]
pub mod js;

pub use adapter::Adapter;
pub use adapter::RawModeGuard;
pub use cell::BridgeCell;
pub use config::BridgeConfig;
pub use config::DEFAULT_GLOBAL_KEY;
pub use error::TermError;
pub use host::Bridge;
pub use host::Fd;
pub use host::HostError;
pub use host::HostValue;
pub use host::Method;
pub use host::Reply;
pub use state::State;
pub use stub::StubBridge;

#[cfg(target_arch = "wasm32")]
pub use js::{
    JsBridge, JsState, get_size, get_state, install, is_terminal, make_raw, read_password,
    restore, with_raw_mode,
};

pub type Result<T> = std::result::Result<T, TermError>;
