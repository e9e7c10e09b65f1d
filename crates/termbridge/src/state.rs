/// A terminal mode snapshot produced by the host's `getState` or `makeRaw`.
///
/// The wrapped value is never inspected; it only travels back to the host's
/// `restore`. A state obtained for one descriptor must only be restored on
/// that same descriptor.
#[derive(Debug, Clone)]
pub struct State<V> {
    value: V,
}

impl<V> State<V> {
    pub(crate) fn new(value: V) -> Self {
        Self { value }
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }
}
