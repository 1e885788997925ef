use std::thread;
use std::time::Duration;

/// Explicit stand-in for network latency.
///
/// Mock services wait on this boundary exactly once per operation, so real
/// IO or failure injection can replace the timer without restructuring
/// callers. There is no retry and no cancellation.
pub trait Latency {
    fn wait(&self);
}

/// Single-shot fixed-duration delay.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Latency for FixedDelay {
    fn wait(&self) {
        thread::sleep(self.0);
    }
}

/// Completes immediately; used by tests and `--no-delay`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Latency for NoDelay {
    fn wait(&self) {}
}
