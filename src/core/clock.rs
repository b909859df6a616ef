use chrono::{DateTime, Utc};

/// Source of the current instant, used to stamp `created_at` on new invoices.
///
/// Production code uses [`SystemClock`]; tests inject a [`FixedClock`] so the
/// timestamp is deterministic.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }

    #[test]
    fn boxed_and_borrowed_clocks_delegate() {
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let fixed = FixedClock(instant);
        let boxed: Box<dyn Clock> = Box::new(fixed);
        assert_eq!(boxed.now(), instant);

        fn stamp(clock: impl Clock) -> DateTime<Utc> {
            clock.now()
        }
        assert_eq!(stamp(&fixed), instant);
        assert_eq!(stamp(boxed), instant);
    }
}
