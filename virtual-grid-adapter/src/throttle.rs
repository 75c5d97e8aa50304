/// A leading-edge throttle with a guaranteed trailing call, driven by host time.
///
/// The first call of a burst fires immediately. Calls that arrive within `interval_ms` of the
/// last firing are coalesced into a single pending value (the latest one wins), released by
/// [`Throttle::poll`] once the interval has elapsed. Releasing re-arms the interval, so a
/// long burst fires at most once per interval and its last call is never dropped.
///
/// This type holds no timers. Adapters call `poll` from their frame/timer tick, or schedule a
/// wake-up at [`Throttle::deadline`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle<T> {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Offers `value` at `now_ms`. Returns it if it should be acted on now.
    pub fn call(&mut self, now_ms: u64, value: T) -> Option<T> {
        if let Some(last) = self.last_fire_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                vtrace!(now_ms, last, "Throttle: coalesced");
                self.pending = Some(value);
                return None;
            }
        }
        self.last_fire_ms = Some(now_ms);
        self.pending = None;
        Some(value)
    }

    /// Releases the pending trailing value if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.deadline()?;
        if now_ms < deadline {
            return None;
        }
        vtrace!(now_ms, deadline, "Throttle: trailing call");
        self.last_fire_ms = Some(now_ms);
        self.pending.take()
    }

    /// When the pending trailing value becomes due, if there is one.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref()?;
        let last = self.last_fire_ms?;
        Some(last.saturating_add(self.interval_ms))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending trailing value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Forgets the current interval: the next call fires immediately.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_fire_ms = None;
    }
}
