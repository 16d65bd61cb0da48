use super::ChartSpec;
use std::collections::HashMap;

/// Drawing engine seam.
///
/// The real implementation talks to Chart.js in the page; tests use a
/// counting fake so the replace lifecycle can be asserted without a DOM.
pub trait ChartBackend {
    type Handle;

    /// Create a chart bound to the element with the given id.
    ///
    /// A missing mount element is a configuration defect and comes back as
    /// `Err`; the registry does not try to recover from it.
    fn create(&self, mount_id: &str, spec: &ChartSpec) -> Result<Self::Handle, String>;

    /// Release the chart's drawing context and internal state.
    fn destroy(&self, handle: Self::Handle);
}

/// Owns at most one live chart instance per named slot.
///
/// Slots are keyed by their fixed mount element id. An update is always
/// destroy-then-create: the old instance is torn down before the replacement
/// is mounted, so a slot never holds a half-updated chart.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    slots: HashMap<&'static str, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: HashMap::new(),
        }
    }

    /// Replace the slot's chart with one built from `spec`.
    ///
    /// Destruction happens unconditionally before the new instance is
    /// created; if creation then fails the slot is left empty.
    pub fn render(&mut self, mount_id: &'static str, spec: &ChartSpec) -> Result<(), String> {
        if let Some(old) = self.slots.remove(mount_id) {
            self.backend.destroy(old);
        }
        let chart = self.backend.create(mount_id, spec)?;
        self.slots.insert(mount_id, chart);
        Ok(())
    }

    /// Number of live chart instances.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slot currently holds a live instance.
    pub fn is_live(&self, mount_id: &str) -> bool {
        self.slots.contains_key(mount_id)
    }
}
