//! Wall-clock `Clock`

use chrono::{DateTime, Local, NaiveDate, Utc};
use rizzmaster_core::Clock;
use rizzmaster_domain::DayZone;

/// Reads the system time; `today` follows the configured day boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: DayZone,
}

impl SystemClock {
    pub fn new(zone: DayZone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            DayZone::Local => Local::now().date_naive(),
            DayZone::Utc => Utc::now().date_naive(),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
