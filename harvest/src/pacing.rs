use std::thread;
use std::time::Duration;

pub const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(500);

/// Paces the detail requests, called once after every successful detail fetch.
pub trait Pacer {
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(DEFAULT_DETAIL_DELAY)
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        thread::sleep(self.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
