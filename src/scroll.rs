//! Scroll-position triggers and the debounce used for scroll-derived state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
    Still,
}

impl ScrollDirection {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Self::Down
        } else if current < previous {
            Self::Up
        } else {
            Self::Still
        }
    }
}

// "top 80%" is a fraction of 0.8
pub fn trigger_start(document_top: f64, viewport_height: f64, viewport_fraction: f64) -> f64 {
    document_top - viewport_height * viewport_fraction
}

pub fn is_revealed(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    target: String,
    viewport_fraction: f64,
    start_scroll: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(target: impl Into<String>, viewport_fraction: f64) -> Self {
        Self {
            target: target.into(),
            viewport_fraction: viewport_fraction.clamp(0.0, 1.0),
            start_scroll: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn measure(&mut self, document_top: f64, viewport_height: f64) {
        self.start_scroll = Some(trigger_start(
            document_top,
            viewport_height,
            self.viewport_fraction,
        ));
    }

    /// Unmeasured triggers keep their content hidden.
    pub fn is_revealed(&self, scroll_y: f64) -> bool {
        self.start_scroll
            .is_some_and(|threshold| is_revealed(scroll_y, threshold))
    }
}

/// Trailing debounce: fires once `interval` seconds after the last trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer {
    interval: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval: interval.max(0.0),
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.interval);
    }

    /// True once per quiet period.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
impl Debouncer {
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
impl ScrollTrigger {
    pub fn with_start_scroll(mut self, start_scroll: f64) -> Self {
        self.start_scroll = Some(start_scroll);
        self
    }

    pub fn start_scroll(&self) -> Option<f64> {
        self.start_scroll
    }
}
