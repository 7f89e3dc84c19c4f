use jiff::civil;

/// Wall-clock sample as cascading unit fractions.
///
/// Each field is progress through its unit in `[0, 1)`: seconds carry the
/// sub-second fraction, minutes carry seconds, hours carry minutes. Every
/// hand therefore moves continuously instead of ticking, and an angle only
/// wraps to zero at the exact boundary of its unit.
///
/// `subsecond` is computed as part of the cascade and exposed for hosts
/// that want it; no fourth hand is rendered from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockTime {
    /// Progress through the half-day, `[0, 1)`.
    pub hour: f64,
    /// Progress through the hour, `[0, 1)`.
    pub minute: f64,
    /// Progress through the minute, `[0, 1)`.
    pub second: f64,
    /// Progress through the second, `[0, 1)`.
    pub subsecond: f64,
}

impl ClockTime {
    /// Samples the local system clock.
    pub fn now() -> Self {
        Self::from_civil(jiff::Zoned::now().time())
    }

    /// Builds the cascade from a civil time of day.
    ///
    /// Uses a 12-hour representation (`hour % 12`), so midnight and noon
    /// both put the hour hand at twelve.
    pub fn from_civil(t: civil::Time) -> Self {
        let subsecond = f64::from(t.millisecond()) / 1_000.0;
        let seconds = f64::from(t.second()) + subsecond; // [0, 60)
        let minutes = f64::from(t.minute()) + seconds / 60.0; // [0, 60)
        let hours = f64::from(t.hour() % 12) + minutes / 60.0; // [0, 12)

        Self {
            hour: hours / 12.0,
            minute: minutes / 60.0,
            second: seconds / 60.0,
            subsecond,
        }
    }

    /// Converts the fractions into hand rotations.
    #[inline]
    pub fn angles(self) -> HandAngles {
        HandAngles {
            hour: (self.hour * 360.0) as f32,
            minute: (self.minute * 360.0) as f32,
            second: (self.second * 360.0) as f32,
        }
    }
}

/// Hand rotations in degrees, clockwise from twelve o'clock, each in
/// `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}
