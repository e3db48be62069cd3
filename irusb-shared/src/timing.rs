use std::time::Duration;

/// Delays imposed on the controlling flow by the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Gap before every code transmitted from a script
    pub pace: Duration,
    /// `#wait`
    pub wait: Duration,
    /// `#wake`, the time the target needs after being woken up
    pub wake: Duration,
    /// Completion flag poll interval while receiving
    pub poll: Duration,
}

impl Timing {
    pub const PACE: Duration = Duration::from_millis(500);
    pub const WAIT: Duration = Duration::from_secs(1);
    pub const WAKE: Duration = Duration::from_secs(15);
    pub const POLL: Duration = Duration::from_millis(1);

    pub fn with_wake(self, wake: Duration) -> Self {
        Timing { wake, ..self }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            pace: Self::PACE,
            wait: Self::WAIT,
            wake: Self::WAKE,
            poll: Self::POLL,
        }
    }
}
