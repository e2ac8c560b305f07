//! Local-calendar time helpers.
//!
//! Bucket boundaries (day, hour) follow the display time zone's calendar, not
//! UTC, so day buckets stay aligned with what occupants of the room experience
//! even across DST transitions.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Resolve a naive local wall-clock time to an instant in `tz`.
///
/// Ambiguous times (fall-back transition) resolve to the earlier instant; wall
/// times skipped by a spring-forward transition resolve to the corresponding
/// time one hour later.
pub fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

/// Start of the local calendar day containing `dt`.
pub fn floor_to_day(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = dt
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid wall time");
    resolve_local(dt.timezone(), midnight)
}

/// Start of the local calendar day following `dt`, or `dt` itself when it
/// already sits exactly on a local midnight.
pub fn ceil_to_day(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let floor = floor_to_day(dt);
    if floor == *dt {
        floor
    } else {
        let next_midnight = (dt.date_naive() + Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid wall time");
        resolve_local(dt.timezone(), next_midnight)
    }
}

/// Start of the clock hour containing `dt`.
///
/// Computed by subtracting the sub-hour remainder from the instant, so the
/// two occurrences of a repeated wall hour around a fall-back transition
/// floor to two distinct instants.
pub fn floor_to_hour(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let remainder =
        i64::from(dt.minute()) * 60 + i64::from(dt.second());
    *dt - Duration::seconds(remainder) - Duration::nanoseconds(i64::from(dt.nanosecond()))
}

/// Whether `dt` falls within the given local calendar month.
pub fn in_month(dt: &DateTime<Tz>, year: i32, month: u32) -> bool {
    dt.year() == year && dt.month() == month
}
