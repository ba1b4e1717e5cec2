use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose wiring logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Thresholds and timings shared by the page behaviors.
///
/// Distances are CSS pixels, durations are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeConfig {
    /// Page offset past which the navbar gets `scrolled`.
    pub navbar_shrink_offset: f64,
    /// How far above the viewport bottom a `.section` must be to reveal.
    pub section_reveal_margin: f64,
    /// Added to the scroll position before matching sections to nav links.
    pub active_link_offset: f64,
    pub timeline_margin: f64,
    pub timeline_stagger_ms: u32,
    pub counter_margin: f64,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub modal_auto_close_ms: u32,
    pub contact_ack_ms: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            navbar_shrink_offset: 50.0,
            section_reveal_margin: 150.0,
            active_link_offset: 100.0,
            timeline_margin: 100.0,
            timeline_stagger_ms: 100,
            counter_margin: 100.0,
            counter_duration_ms: 1500,
            counter_steps: 30,
            modal_auto_close_ms: 3000,
            contact_ack_ms: 3000,
        }
    }
}

impl ChromeConfig {
    pub fn counter_step_ms(&self) -> u32 {
        self.counter_duration_ms / self.counter_steps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counter_steps_are_fifty_ms_apart() {
        assert_eq!(ChromeConfig::default().counter_step_ms(), 50);
    }

    #[test]
    fn zero_steps_does_not_divide_by_zero() {
        let config = ChromeConfig { counter_steps: 0, ..ChromeConfig::default() };
        assert_eq!(config.counter_step_ms(), 1500);
    }
}
