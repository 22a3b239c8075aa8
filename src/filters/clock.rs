//! Time sources for the filter engine.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Supplies the current instant for debouncing and the current calendar day
/// for date presets.
pub trait Clock {
    fn now(&self) -> Instant;
    fn today(&self) -> NaiveDate;
    /// Local wall-clock time, used to stamp history entries.
    fn timestamp(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn timestamp(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to. Clones share the same time, so a test
/// can keep a handle after moving the clock into an engine.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
    today: Rc<Cell<NaiveDate>>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            today: Rc::new(Cell::new(today)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }

    /// Midnight of the current day plus the time advanced so far.
    fn timestamp(&self) -> NaiveDateTime {
        let elapsed = TimeDelta::from_std(self.elapsed.get()).unwrap_or(TimeDelta::zero());
        self.today.get().and_time(NaiveTime::MIN) + elapsed
    }
}
