//! Dispatch context for rule evaluation.

/// Runtime simulation state passed to dispatching rules.
///
/// Day-granular rules (slack, lateness) need the current simulation day;
/// pool-aware rules can weigh the number of free contributors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext {
    /// Current simulation day.
    pub current_day: u32,
    /// Number of contributors currently free.
    pub free_contributors: usize,
}

impl DispatchContext {
    /// Creates a context at the given day.
    pub fn at_day(current_day: u32) -> Self {
        Self {
            current_day,
            ..Default::default()
        }
    }

    /// Sets the free-contributor count.
    pub fn with_free_contributors(mut self, free: usize) -> Self {
        self.free_contributors = free;
        self
    }
}
