//! Terminal front-end configuration.

use std::time::Duration;

/// Terminal UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Input poll / redraw interval (milliseconds)
    pub tick_ms: u64,

    /// Number of log lines kept for the status pane
    pub log_history: usize,

    /// Width of the form column (terminal cells)
    pub form_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            log_history: 200,
            form_width: 58,
        }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
