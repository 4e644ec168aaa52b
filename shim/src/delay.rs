// Licensed under the Apache-2.0 license

use embedded_hal::delay::DelayNs;

/// Scheduler tick rate the board's RTOS is configured with.
pub const DEFAULT_TICK_RATE_HZ: u32 = 1000;

#[cfg(target_arch = "riscv32")]
extern "C" {
    fn vTaskDelay(ticks: u32);
}

/// Blocks the calling task for a number of scheduler ticks.
///
/// On the target the task yields to the scheduler. On the host the thread
/// sleeps for the wall-clock length of the ticks.
#[derive(Debug, Copy, Clone)]
pub struct TaskDelay {
    tick_rate_hz: u32,
}

impl Default for TaskDelay {
    fn default() -> Self {
        TaskDelay {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
        }
    }
}

impl TaskDelay {
    pub fn new(tick_rate_hz: u32) -> Self {
        crate::xil_assert_nonvoid!(tick_rate_hz != 0);
        TaskDelay { tick_rate_hz }
    }

    pub fn tick_rate_hz(&self) -> u32 {
        self.tick_rate_hz
    }

    /// Number of whole ticks covering `ns`, rounded up. Saturates at
    /// `u32::MAX` for tick rates above 1 GHz.
    pub fn ns_to_ticks(&self, ns: u32) -> u32 {
        let ticks = (u64::from(ns) * u64::from(self.tick_rate_hz)).div_ceil(1_000_000_000);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    pub fn delay_ticks(&mut self, ticks: u32) {
        #[cfg(target_arch = "riscv32")]
        unsafe {
            vTaskDelay(ticks);
        }
        #[cfg(not(target_arch = "riscv32"))]
        {
            let us = u64::from(ticks) * 1_000_000 / u64::from(self.tick_rate_hz);
            std::thread::sleep(std::time::Duration::from_micros(us));
        }
    }
}

impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = self.ns_to_ticks(ns);
        self.delay_ticks(ticks);
    }
}

/// Blocks for `ticks` scheduler ticks at the default tick rate.
///
/// The vendor driver calls this with what it believes are microseconds; the
/// port passes the count through unchanged as ticks.
pub fn usleep(ticks: u32) {
    TaskDelay::default().delay_ticks(ticks);
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_ns_to_ticks_rounds_up() {
        let delay = TaskDelay::new(1000);
        assert_eq!(delay.ns_to_ticks(0), 0);
        assert_eq!(delay.ns_to_ticks(1), 1);
        assert_eq!(delay.ns_to_ticks(1_000_000), 1);
        assert_eq!(delay.ns_to_ticks(1_000_001), 2);
        assert_eq!(delay.ns_to_ticks(u32::MAX), 4295);

        let fast = TaskDelay::new(100_000);
        assert_eq!(fast.ns_to_ticks(25_000), 3);
    }

    #[test]
    fn test_ns_to_ticks_saturates() {
        let delay = TaskDelay::new(u32::MAX);
        assert_eq!(delay.ns_to_ticks(1_000_000_000), u32::MAX);
        assert_eq!(delay.ns_to_ticks(u32::MAX), u32::MAX);
        // Just under the limit still converts exactly.
        assert_eq!(delay.ns_to_ticks(999_999_999), 4_294_967_291);
    }

    #[test]
    fn test_delay_ticks_blocks() {
        let mut delay = TaskDelay::new(1000);
        let start = Instant::now();
        delay.delay_ticks(5);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_delay_ns_blocks_whole_ticks() {
        let mut delay = TaskDelay::new(100);
        let start = Instant::now();
        // Rounds up to one 10 ms tick.
        delay.delay_ns(1);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_usleep_uses_ticks() {
        let start = Instant::now();
        usleep(2);
        assert!(start.elapsed() >= Duration::from_millis(2));
        assert_eq!(TaskDelay::default().tick_rate_hz(), DEFAULT_TICK_RATE_HZ);
    }

    #[test]
    #[should_panic(expected = "tick_rate_hz != 0")]
    fn test_zero_tick_rate_halts() {
        TaskDelay::new(0);
    }
}
