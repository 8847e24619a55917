//! Controllable clock for tests that span more than one day.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, Utc};
use mockable::Clock;

/// Clock whose current instant is set explicitly by the test.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock reading `time` UTC on `date`.
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(date.and_time(time).and_utc())
    }

    pub fn advance_minutes(&self, minutes: i64) {
        *self.lock_clock() += TimeDelta::minutes(minutes);
    }

    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    /// Current UTC calendar date.
    pub fn today(&self) -> NaiveDate {
        self.lock_clock().date_naive()
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}
