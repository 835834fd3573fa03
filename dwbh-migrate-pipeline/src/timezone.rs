//! Interpretation of the naive v1 timestamps in the migration timezone.
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Zone the v1 application wrote its wall-clock timestamps in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Madrid;

/// Attaches `tz` to a naive wall-clock timestamp.
///
/// Clock transitions resolve towards standard time: an ambiguous time in the
/// autumn overlap maps to its later (standard-time) instant, and a time inside
/// the spring gap is read with the offset in force before the gap.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => datetime.fixed_offset(),
        LocalResult::Ambiguous(_, standard) => standard.fixed_offset(),
        LocalResult::None => {
            let before_gap = naive - TimeDelta::days(1);
            let offset = tz
                .offset_from_local_datetime(&before_gap)
                .earliest()
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&before_gap))
                .fix();
            let utc = naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            tz.from_utc_datetime(&utc).fixed_offset()
        }
    }
}
