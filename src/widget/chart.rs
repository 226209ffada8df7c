/// Owner of the single live chart instance.
///
/// The dashboard renders at most one chart at a time: installing a new
/// handle tears the previous one down first (via its `Drop`), and release is
/// idempotent so every path that hides the chart can call it unconditionally.
#[derive(Debug)]
pub struct ChartSlot<H> {
    handle: Option<H>,
}

impl<H> ChartSlot<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Install a freshly rendered chart, dropping any previous instance.
    pub fn replace(&mut self, handle: H) {
        self.release();
        self.handle = Some(handle);
    }

    /// Tear down the live chart, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.handle = None;
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for ChartSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
