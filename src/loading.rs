/// How long the loading screen covers the page, regardless of asset state.
pub const LOADING_DURATION_MS: f64 = 3000.0;
/// Tick period of the cosmetic progress bar.
pub const PROGRESS_TICK_MS: u64 = 50;
const PROGRESS_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Pending,
    Ready,
    Cancelled,
}

/// Fixed-timer gate in front of the page. It becomes ready once and never
/// reverts; a cancelled gate never becomes ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingGate {
    state: GateState,
    started_at_ms: f64,
}

impl LoadingGate {
    /// A pending gate whose clock started at `started_at_ms`.
    pub fn new(started_at_ms: f64) -> Self {
        Self {
            state: GateState::Pending,
            started_at_ms,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state != GateState::Ready
    }

    /// Reports whether this poll, taken at `now_ms`, is the one that flips
    /// the gate to ready.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let elapsed_ms = now_ms - self.started_at_ms;
        if self.state != GateState::Pending || !(elapsed_ms >= LOADING_DURATION_MS) {
            return false;
        }
        self.state = GateState::Ready;
        true
    }

    /// Time left before a poll can succeed; zero once the gate is settled.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        if self.state != GateState::Pending {
            return 0.0;
        }
        let left = LOADING_DURATION_MS - (now_ms - self.started_at_ms);
        if left.is_finite() {
            left.max(0.0)
        } else {
            LOADING_DURATION_MS
        }
    }

    pub fn cancel(&mut self) {
        if self.state == GateState::Pending {
            self.state = GateState::Cancelled;
        }
    }
}

/// The percentage shown under the spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingProgress(u8);

impl LoadingProgress {
    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }

    pub fn tick(self) -> Self {
        Self(self.0.saturating_add(PROGRESS_STEP).min(100))
    }

    /// Advances one tick in place. Returns `false` once the bar is full and
    /// the ticker can stop.
    pub fn advance(&mut self) -> bool {
        *self = self.tick();
        !self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: f64 = 12_345.0;

    #[test]
    fn test_gate_waits_full_duration() {
        let mut gate = LoadingGate::new(T0);
        assert!(gate.is_loading());
        assert!(!gate.poll(T0));
        assert!(!gate.poll(T0 + 2999.9));
        assert!(gate.is_loading());
        assert!(gate.poll(T0 + 3000.0));
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_gate_measures_from_its_start() {
        // an absolute timestamp past 3000 is not enough on its own
        let mut gate = LoadingGate::new(T0);
        assert!(!gate.poll(LOADING_DURATION_MS));
        assert_eq!(gate.state(), GateState::Pending);
    }

    #[test]
    fn test_early_timer_reports_remaining() {
        let mut gate = LoadingGate::new(T0);
        let now = T0 + 2999.5;
        assert!(!gate.poll(now));
        assert!((gate.remaining_ms(now) - 0.5).abs() < 1e-9);
        assert!(gate.poll(now + gate.remaining_ms(now)));
        assert_eq!(gate.remaining_ms(now), 0.0);
    }

    #[test]
    fn test_gate_flips_exactly_once() {
        let mut gate = LoadingGate::new(T0);
        assert!(gate.poll(T0 + 3500.0));
        assert!(!gate.poll(T0 + 4000.0));
        assert!(!gate.poll(T0 + 10_000.0));
        assert_eq!(gate.state(), GateState::Ready);
    }

    #[test]
    fn test_cancelled_gate_never_fires() {
        let mut gate = LoadingGate::new(T0);
        gate.poll(T0 + 1200.0);
        gate.cancel();
        assert!(!gate.poll(T0 + 3000.0));
        assert_eq!(gate.state(), GateState::Cancelled);
        assert_eq!(gate.remaining_ms(T0 + 1500.0), 0.0);
        // a second cancel is harmless
        gate.cancel();
        assert_eq!(gate.state(), GateState::Cancelled);
    }

    #[test]
    fn test_cancel_after_ready_keeps_ready() {
        let mut gate = LoadingGate::new(T0);
        gate.poll(T0 + 3000.0);
        gate.cancel();
        assert_eq!(gate.state(), GateState::Ready);
    }

    #[test]
    fn test_nan_clock_is_ignored() {
        let mut gate = LoadingGate::new(T0);
        assert!(!gate.poll(f64::NAN));
        assert_eq!(gate.state(), GateState::Pending);
        assert_eq!(gate.remaining_ms(f64::NAN), LOADING_DURATION_MS);
    }

    #[test]
    fn test_progress_saturates() {
        let mut progress = LoadingProgress::default();
        for _ in 0..49 {
            progress = progress.tick();
        }
        assert_eq!(progress.percent(), 98);
        assert!(!progress.is_complete());
        progress = progress.tick();
        assert!(progress.is_complete());
        assert_eq!(progress.tick().percent(), 100);
    }

    #[test]
    fn test_ticker_stops_when_full() {
        let mut progress = LoadingProgress::default();
        let mut ticks = 1;
        while progress.advance() {
            ticks += 1;
        }
        assert_eq!(ticks, 50);
        assert_eq!(progress.percent(), 100);
        assert!(!progress.advance());
        assert_eq!(progress.percent(), 100);
    }
}
