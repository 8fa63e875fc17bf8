use std::time::{Duration, Instant};

use spin_sleep::SpinSleeper;

/// Length of one video frame at 60 Hz
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Helper struct for frame pacing
pub struct Timer {
    start: Instant,
    sleeper: SpinSleeper,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            sleeper: SpinSleeper::default(),
        }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Time passed since the last reset
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Sleeps until `time` has passed since the last reset
    pub fn wait(&self, time: Duration) {
        let passed_time = self.elapsed();
        if time > passed_time {
            let wait_time = time - passed_time;
            if wait_time.as_millis() > 1 {
                self.sleeper.sleep(wait_time);
            }
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
