use tracing::{debug, trace, warn};

use crate::error::TermError;
use crate::host::{Bridge, Fd, HostValue, Method, Reply};
use crate::state::State;
use crate::Result;

const SIZE_SHAPE: &str = "getSize(fd) must return an object with width and height properties";

/// Terminal operations relayed to a host bridge object.
#[derive(Debug, Clone)]
pub struct Adapter<B> {
    bridge: B,
}

impl<B: Bridge> Adapter<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    fn call(&self, method: Method, fd: Fd, state: Option<&B::Value>) -> Reply<B::Value> {
        trace!(%method, fd, "bridge call");
        self.bridge.call(method, fd, state)
    }

    /// Reports whether `fd` is a terminal. A host that cannot answer is
    /// treated as saying no.
    pub fn is_terminal(&self, fd: Fd) -> bool {
        match self.call(Method::IsTerminal, fd, None) {
            Reply::Value(value) => value.is_truthy(),
            Reply::Error(err) => {
                debug!(fd, error = %err, "isTerminal failed, assuming not a terminal");
                false
            }
        }
    }

    /// Returns `(width, height)` of the terminal behind `fd`.
    pub fn size(&self, fd: Fd) -> Result<(i32, i32)> {
        let value = self
            .call(Method::GetSize, fd, None)
            .into_result()
            .map_err(|err| TermError::bridge(Method::GetSize, err))?;

        if !value.is_object_like() {
            return Err(TermError::protocol(Method::GetSize, SIZE_SHAPE));
        }
        match (value.number_field("width"), value.number_field("height")) {
            (Some(width), Some(height)) => Ok((width as i32, height as i32)),
            _ => Err(TermError::protocol(Method::GetSize, SIZE_SHAPE)),
        }
    }

    /// Snapshots the current mode of `fd` for a later [`Adapter::restore`].
    pub fn get_state(&self, fd: Fd) -> Result<State<B::Value>> {
        self.state_call(Method::GetState, fd)
    }

    /// Puts `fd` into raw mode, returning the state the host hands back for
    /// [`Adapter::restore`].
    pub fn make_raw(&self, fd: Fd) -> Result<State<B::Value>> {
        self.state_call(Method::MakeRaw, fd)
    }

    fn state_call(&self, method: Method, fd: Fd) -> Result<State<B::Value>> {
        self.call(method, fd, None)
            .into_result()
            .map(State::new)
            .map_err(|err| TermError::bridge(method, err))
    }

    /// Restores `fd` to `state`. The host's return value is ignored unless it
    /// is an error.
    pub fn restore(&self, fd: Fd, state: &State<B::Value>) -> Result<()> {
        match self.call(Method::Restore, fd, Some(state.value())) {
            Reply::Value(_) => Ok(()),
            Reply::Error(err) => Err(TermError::bridge(Method::Restore, err)),
        }
    }

    /// The host has no secure line input, so this always fails without
    /// touching the bridge.
    pub fn read_password(&self, _fd: Fd) -> Result<Vec<u8>> {
        Err(TermError::unsupported("read_password"))
    }

    /// Enters raw mode on `fd` until the returned guard is dropped.
    pub fn raw_mode(&self, fd: Fd) -> Result<RawModeGuard<'_, B>> {
        let state = self.make_raw(fd)?;
        Ok(RawModeGuard {
            adapter: self,
            fd,
            state: Some(state),
        })
    }

    /// Runs `f` with `fd` in raw mode, then restores. A failing restore is
    /// returned instead of `f`'s output.
    pub fn with_raw_mode<R>(&self, fd: Fd, f: impl FnOnce() -> R) -> Result<R> {
        let guard = self.raw_mode(fd)?;
        let out = f();
        guard.restore()?;
        Ok(out)
    }
}

/// Restores the state returned by `makeRaw` on drop.
#[must_use = "RawModeGuard must be held while raw mode is needed; dropping it restores the terminal"]
pub struct RawModeGuard<'a, B: Bridge> {
    adapter: &'a Adapter<B>,
    fd: Fd,
    state: Option<State<B::Value>>,
}

impl<B: Bridge> RawModeGuard<'_, B> {
    pub fn fd(&self) -> Fd {
        self.fd
    }

    /// Restores now, surfacing the host's error instead of logging it.
    pub fn restore(mut self) -> Result<()> {
        match self.state.take() {
            Some(state) => self.adapter.restore(self.fd, &state),
            None => Ok(()),
        }
    }
}

impl<B: Bridge> Drop for RawModeGuard<'_, B> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            if let Err(err) = self.adapter.restore(self.fd, &state) {
                warn!(fd = self.fd, error = %err, "failed to restore terminal state");
            }
        }
    }
}
