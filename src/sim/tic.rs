use std::time::{Duration, Instant};

pub const SIM_FPS: u32 = 30;

/// Fixed-rate pacing for the frame loop.
///
/// `wait` is the loop's only blocking point: it sleeps until the next tic
/// boundary, then schedules the one after. A loop that falls behind by more
/// than a whole tic is resynchronised to "now" instead of bursting.
pub struct TicRunner {
    tic: Duration,
    next: Instant,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new(SIM_FPS)
    }
}

impl TicRunner {
    /// `rate` is clamped to at least one tic per second.
    pub fn new(rate: u32) -> Self {
        Self::starting_at(rate, Instant::now())
    }

    fn starting_at(rate: u32, now: Instant) -> Self {
        let tic = Duration::from_micros(1_000_000 / rate.max(1) as u64);
        Self {
            tic,
            next: now + tic,
        }
    }

    #[inline]
    pub fn tic(&self) -> Duration {
        self.tic
    }

    /// Time left until the next boundary, zero if it has already passed.
    #[inline]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Block until the next tic boundary.
    pub fn wait(&mut self) {
        let left = self.remaining(Instant::now());
        if !left.is_zero() {
            std::thread::sleep(left);
        }
        self.advance(Instant::now());
    }

    /* ---------------------------------------------------------------- */
    /* internal: move the deadline one tic forward                       */
    /* ---------------------------------------------------------------- */
    fn advance(&mut self, now: Instant) {
        self.next += self.tic;
        if self.next + self.tic < now {
            self.next = now + self.tic;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tic_length_from_rate() {
        let t0 = Instant::now();
        let r = TicRunner::starting_at(30, t0);
        assert_eq!(r.tic(), Duration::from_micros(33_333));
        assert_eq!(r.remaining(t0), Duration::from_micros(33_333));
        assert_eq!(r.remaining(t0 + Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn deadline_advances_one_tic() {
        let t0 = Instant::now();
        let mut r = TicRunner::starting_at(10, t0);
        r.advance(t0 + Duration::from_millis(100));
        assert_eq!(r.remaining(t0), Duration::from_millis(200));
    }

    #[test]
    fn late_loop_resyncs() {
        let t0 = Instant::now();
        let mut r = TicRunner::starting_at(10, t0);
        let late = t0 + Duration::from_secs(2);
        r.advance(late);
        assert_eq!(r.remaining(late), Duration::from_millis(100));
    }

    #[test]
    fn zero_rate_is_clamped() {
        let t0 = Instant::now();
        assert_eq!(TicRunner::starting_at(0, t0).tic(), Duration::from_secs(1));
    }
}
