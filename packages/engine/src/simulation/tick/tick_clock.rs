use crate::domain::config::TickPolicy;

/// Gates simulation ticks on elapsed host time.
///
/// Independent of the rule logic and of the render cadence: the host calls
/// `poll` on every animation frame and only a `true` advances the automaton.
/// At most one tick is reported per poll, even after a long stall.
#[derive(Clone, Debug, PartialEq)]
pub struct TickClock {
    interval_ms: f64,
    last_tick_ms: f64,
    policy: TickPolicy,
}

impl TickClock {
    pub fn new(interval_ms: f64, policy: TickPolicy) -> Self {
        Self {
            interval_ms: sanitize_interval(interval_ms),
            last_tick_ms: 0.0,
            policy,
        }
    }

    /// True when a tick is due at `now_ms`; records it.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tick_ms < self.interval_ms {
            return false;
        }

        match self.policy {
            TickPolicy::Reset => self.last_tick_ms = now_ms,
            TickPolicy::Accumulate => {
                self.last_tick_ms += self.interval_ms;
                // More than a whole interval behind: drop the backlog.
                if now_ms - self.last_tick_ms >= self.interval_ms {
                    self.last_tick_ms = now_ms;
                }
            }
        }
        true
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = sanitize_interval(interval_ms);
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }
}

fn sanitize_interval(interval_ms: f64) -> f64 {
    if interval_ms.is_finite() && interval_ms > 0.0 {
        interval_ms
    } else {
        0.0
    }
}
