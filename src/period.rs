use std::fmt;

use tracing::trace;

/// A named bucket of elapsed minutes. Positive distances are in the past,
/// negative ones in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Now,
    OneMinutePast,
    XMinutesPast,
    AboutAnHourPast,
    XHoursPast,
    OneDayPast,
    XDaysPast,
    OneWeekPast,
    XWeeksPast,
    AboutAMonthPast,
    XMonthsPast,
    AboutAYearPast,
    OverAYearPast,
    AlmostTwoYearsPast,
    XYearsPast,
    OneMinuteFuture,
    XMinutesFuture,
    AboutAnHourFuture,
    XHoursFuture,
    OneDayFuture,
    XDaysFuture,
    AboutAMonthFuture,
    XMonthsFuture,
    AboutAYearFuture,
    OverAYearFuture,
    AlmostTwoYearsFuture,
    XYearsFuture,
}

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 1440;
pub const MINUTES_PER_WEEK: i64 = 10_080;
pub const MINUTES_PER_MONTH: i64 = 43_200;
pub const MINUTES_PER_YEAR: i64 = 525_600;

pub struct PeriodDef {
    pub period: Period,
    pub id: &'static str,
    pub key: &'static str,
    matches: fn(i64) -> bool,
}

impl PeriodDef {
    pub fn matches(&self, minutes: i64) -> bool {
        (self.matches)(minutes)
    }
}

macro_rules! def {
    ($period:ident, $id:literal, $key:literal, $matches:expr) => {
        PeriodDef {
            period: Period::$period,
            id: $id,
            key: $key,
            matches: $matches,
        }
    };
}

/// Classification table, evaluated top to bottom. The rounded-year
/// catch-alls overlap the fixed-width buckets and must stay last on
/// each side.
pub const PERIODS: &[PeriodDef] = &[
    def!(Now, "NOW", "ml.timeago.now", |d| d == 0),
    def!(OneMinutePast, "ONEMINUTE_PAST", "ml.timeago.oneminute.past", |d| d == 1),
    def!(XMinutesPast, "XMINUTES_PAST", "ml.timeago.xminutes.past", |d| (2..=44).contains(&d)),
    def!(AboutAnHourPast, "ABOUTANHOUR_PAST", "ml.timeago.aboutanhour.past", |d| (45..=89).contains(&d)),
    def!(XHoursPast, "XHOURS_PAST", "ml.timeago.xhours.past", |d| (90..=1439).contains(&d)),
    def!(OneDayPast, "ONEDAY_PAST", "ml.timeago.oneday.past", |d| (1440..=2519).contains(&d)),
    def!(XDaysPast, "XDAYS_PAST", "ml.timeago.xdays.past", |d| (2520..=10_079).contains(&d)),
    def!(OneWeekPast, "ONEWEEK_PAST", "ml.timeago.oneweek.past", |d| (10_080..=20_159).contains(&d)),
    def!(XWeeksPast, "XWEEKS_PAST", "ml.timeago.xweeks.past", |d| (20_160..=43_199).contains(&d)),
    def!(AboutAMonthPast, "ABOUTAMONTH_PAST", "ml.timeago.aboutamonth.past", |d| (43_200..=86_399).contains(&d)),
    def!(XMonthsPast, "XMONTHS_PAST", "ml.timeago.xmonths.past", |d| (86_400..=525_599).contains(&d)),
    def!(AboutAYearPast, "ABOUTAYEAR_PAST", "ml.timeago.aboutayear.past", |d| (525_600..=655_199).contains(&d)),
    def!(OverAYearPast, "OVERAYEAR_PAST", "ml.timeago.overayear.past", |d| (655_200..=914_399).contains(&d)),
    def!(AlmostTwoYearsPast, "ALMOSTTWOYEARS_PAST", "ml.timeago.almosttwoyears.past", |d| (914_400..=1_051_199).contains(&d)),
    def!(XYearsPast, "XYEARS_PAST", "ml.timeago.xyears.past", |d| rounded_years(d) > 1),
    def!(OneMinuteFuture, "ONEMINUTE_FUTURE", "ml.timeago.oneminute.future", |d| d == -1),
    def!(XMinutesFuture, "XMINUTES_FUTURE", "ml.timeago.xminutes.future", |d| (-44..=-2).contains(&d)),
    def!(AboutAnHourFuture, "ABOUTANHOUR_FUTURE", "ml.timeago.aboutanhour.future", |d| (-89..=-45).contains(&d)),
    def!(XHoursFuture, "XHOURS_FUTURE", "ml.timeago.xhours.future", |d| (-1439..=-90).contains(&d)),
    def!(OneDayFuture, "ONEDAY_FUTURE", "ml.timeago.oneday.future", |d| (-2519..=-1440).contains(&d)),
    // No future week buckets: week-scale distances stay in days.
    def!(XDaysFuture, "XDAYS_FUTURE", "ml.timeago.xdays.future", |d| (-43_199..=-2520).contains(&d)),
    def!(AboutAMonthFuture, "ABOUTAMONTH_FUTURE", "ml.timeago.aboutamonth.future", |d| (-86_399..=-43_200).contains(&d)),
    def!(XMonthsFuture, "XMONTHS_FUTURE", "ml.timeago.xmonths.future", |d| (-525_599..=-86_400).contains(&d)),
    def!(AboutAYearFuture, "ABOUTAYEAR_FUTURE", "ml.timeago.aboutayear.future", |d| (-655_199..=-525_600).contains(&d)),
    def!(OverAYearFuture, "OVERAYEAR_FUTURE", "ml.timeago.overayear.future", |d| (-914_399..=-655_200).contains(&d)),
    def!(AlmostTwoYearsFuture, "ALMOSTTWOYEARS_FUTURE", "ml.timeago.almosttwoyears.future", |d| (-1_051_199..=-914_400).contains(&d)),
    def!(XYearsFuture, "XYEARS_FUTURE", "ml.timeago.xyears.future", |d| rounded_years(d) < -1),
];

fn rounded_years(minutes: i64) -> i64 {
    round_half_up(minutes as f64 / MINUTES_PER_YEAR as f64)
}

/// Rounds to the nearest integer with ties toward positive infinity.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Returns the first period whose range contains `minutes`.
pub fn classify(minutes: i64) -> Option<Period> {
    let period = PERIODS
        .iter()
        .find(|def| def.matches(minutes))
        .map(|def| def.period);
    trace!(minutes = minutes, period = ?period, "Classified distance");
    period
}

impl Period {
    fn def(self) -> &'static PeriodDef {
        // The table holds every variant exactly once, in declaration order.
        &PERIODS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn id(self) -> &'static str {
        self.def().id
    }

    pub fn is_future(self) -> bool {
        self as usize > Period::XYearsPast as usize
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
