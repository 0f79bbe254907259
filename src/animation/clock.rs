/// Converts host timestamps (milliseconds, e.g. `performance.now()`) into
/// elapsed seconds since the first frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start_ms: f64,
    last: f32,
}

impl FrameClock {
    pub fn new(start_ms: f64) -> Self {
        Self { start_ms, last: 0.0 }
    }

    /// Elapsed seconds at `now_ms`. Never decreases: a timestamp earlier than
    /// the previous one yields the previous value.
    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let seconds = ((now_ms - self.start_ms) * 0.001) as f32;
        if seconds > self.last {
            self.last = seconds;
        }
        self.last
    }

    /// Last value returned by [`FrameClock::elapsed`]
    pub fn last(&self) -> f32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let mut clock = FrameClock::new(1234.5);
        assert_eq!(clock.last(), 0.0);
        assert_eq!(clock.elapsed(1234.5), 0.0);
    }

    #[test]
    fn test_converts_milliseconds() {
        let mut clock = FrameClock::new(1000.0);
        assert!((clock.elapsed(2500.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut clock = FrameClock::new(0.0);
        assert!((clock.elapsed(500.0) - 0.5).abs() < 1e-6);
        assert!((clock.elapsed(400.0) - 0.5).abs() < 1e-6);
        assert!((clock.elapsed(600.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_timestamp_before_start_clamps() {
        let mut clock = FrameClock::new(1000.0);
        assert_eq!(clock.elapsed(10.0), 0.0);
    }
}
