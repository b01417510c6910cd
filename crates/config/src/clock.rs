/// Source of the current instant for values derived at load time.
pub trait Clock {
    fn now(&self) -> time::OffsetDateTime;

    fn year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock, read in UTC.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> time::OffsetDateTime {
        time::OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    now: time::OffsetDateTime,
}

impl FixedClock {
    pub fn new(now: time::OffsetDateTime) -> Self {
        Self { now }
    }

    /// Midnight UTC on the first of January of `year`.
    pub fn from_year(year: i32) -> Result<Self, time::error::ComponentRange> {
        let now = time::Date::from_calendar_date(year, time::Month::January, 1)?
            .midnight()
            .assume_utc();
        Ok(Self::new(now))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> time::OffsetDateTime {
        self.now
    }
}
