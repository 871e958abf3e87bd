//! Fixed-zone clock helpers.
//!
//! Every "now" value is routed through [`ShiftedClock::current_shifted_time`],
//! which re-expresses the current instant at UTC+8 regardless of the host's
//! configured zone. Consumers therefore observe one consistent clock, and
//! tests swap the underlying [`Clock`] for a [`FixedClock`].
//!
//! TRADE-OFFS
//! ==========
//! The offset is fixed rather than looked up from a tz database, so there is
//! no daylight-saving handling. UTC+8 observes none, which makes that exact.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

/// Offset of the display zone east of UTC, in seconds.
pub const SHIFT_OFFSET_SECS: i32 = 8 * 3600;

/// Template used by [`ShiftedClock::formatted_shifted_time`] callers that
/// have no preference.
pub const DEFAULT_TIME_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

pub const DEFAULT_NIGHT_START_HOUR: u32 = 18;
pub const DEFAULT_NIGHT_END_HOUR: u32 = 6;

/// Source of the current physical instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the host (`Date.now()` in the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let millis = js_sys::Date::now() as i64;
            DateTime::from_timestamp_millis(millis).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let millis = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX));
            DateTime::from_timestamp_millis(millis).unwrap_or_default()
        }
    }
}

/// A clock pinned to a chosen instant. The instant can be moved with
/// [`FixedClock::set`] to simulate the passage of time.
#[derive(Debug)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant: Cell::new(instant) }
    }

    /// A clock whose shifted wall time reads `hour:minute` on 2024-01-01.
    #[must_use]
    pub fn at_shifted_hour(hour: u32, minute: u32) -> Self {
        Self::new(shifted_instant(hour, minute))
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    pub fn set_shifted_hour(&self, hour: u32, minute: u32) {
        self.set(shifted_instant(hour, minute));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

fn shifted_instant(hour: u32, minute: u32) -> DateTime<Utc> {
    // 2024-01-01T00:00:00Z; midnight shifted is 16:00 UTC on the previous day.
    const BASE_UTC_SECS: i64 = 1_704_067_200;
    let wall_secs = i64::from(hour % 24) * 3600 + i64::from(minute % 60) * 60;
    let utc_secs = BASE_UTC_SECS + wall_secs - i64::from(SHIFT_OFFSET_SECS);
    DateTime::from_timestamp(utc_secs, 0).unwrap_or_default()
}

/// The display zone as a chrono offset.
#[must_use]
pub fn shift_offset() -> FixedOffset {
    FixedOffset::east_opt(SHIFT_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Clock Utility operations, available on every [`Clock`].
pub trait ShiftedClock: Clock {
    /// The current instant with wall-clock fields as read at UTC+8.
    fn current_shifted_time(&self) -> DateTime<FixedOffset> {
        self.now().with_timezone(&shift_offset())
    }

    /// Render the shifted time through [`format_time`].
    fn formatted_shifted_time(&self, template: &str) -> String {
        format_time(&self.current_shifted_time(), template)
    }

    /// Shifted hour of day, 0..=23.
    fn current_hour(&self) -> u32 {
        self.current_shifted_time().hour()
    }

    /// Whether the shifted hour falls inside the night window.
    fn is_night_time(&self, night_start_hour: u32, night_end_hour: u32) -> bool {
        is_night_hour(self.current_hour(), night_start_hour, night_end_hour)
    }

    fn greeting(&self) -> Greeting {
        Greeting::for_hour(self.current_hour())
    }
}

impl<C: Clock + ?Sized> ShiftedClock for C {}

/// `hour >= start || hour < end`.
///
/// A window with `start > end` wraps past midnight (18/6 covers 18:00 through
/// 05:59). With `start <= end` the formula is applied as-is and holds for
/// every hour, so 6/18 means "always night". Such configurations are left to
/// the caller.
#[must_use]
pub fn is_night_hour(hour: u32, night_start_hour: u32, night_end_hour: u32) -> bool {
    hour >= night_start_hour || hour < night_end_hour
}

/// Render `time` using the `YYYY MM DD HH mm ss` placeholders.
///
/// All placeholders except the year are zero-padded to two digits. Every
/// occurrence is substituted, scanning left to right; anything else is copied
/// through verbatim.
#[must_use]
pub fn format_time(time: &DateTime<FixedOffset>, template: &str) -> String {
    let fields = [
        ("YYYY", time.year().to_string()),
        ("MM", format!("{:02}", time.month())),
        ("DD", format!("{:02}", time.day())),
        ("HH", format!("{:02}", time.hour())),
        ("mm", format!("{:02}", time.minute())),
        ("ss", format!("{:02}", time.second())),
    ];

    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;
    'scan: while let Some(ch) = rest.chars().next() {
        for (token, value) in &fields {
            if let Some(tail) = rest.strip_prefix(*token) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Time-of-day greeting bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 13:59.
    Midday,
    /// 14:00 to 17:59.
    Afternoon,
    /// 18:00 to 21:59.
    Evening,
    /// 22:00 to 04:59.
    LateNight,
}

impl Greeting {
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=13 => Self::Midday,
            14..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::LateNight,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Midday => "Good noon",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
            Self::LateNight => "It's late",
        }
    }
}
