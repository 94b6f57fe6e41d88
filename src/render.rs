use crate::messages::Messages;
use crate::period::{
    MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_MONTH, MINUTES_PER_WEEK, MINUTES_PER_YEAR,
    Period, classify, round_half_up,
};

/// Classify `minutes` and render the resulting phrase. Empty when no
/// period matches.
pub fn describe(minutes: i64, messages: &Messages) -> String {
    match classify(minutes) {
        Some(period) => render(period, minutes, messages),
        None => String::new(),
    }
}

/// Render the phrase for `period`, computing the displayed quantity from
/// the raw distance.
pub fn render(period: Period, minutes: i64, messages: &Messages) -> String {
    match period {
        Period::XMinutesPast => messages.message_with(period.key(), minutes),
        Period::XHoursPast => collapse(
            messages,
            Period::AboutAnHourPast,
            period,
            ratio(minutes, MINUTES_PER_HOUR),
        ),
        Period::XDaysPast => collapse(
            messages,
            Period::OneDayPast,
            period,
            ratio(minutes, MINUTES_PER_DAY),
        ),
        Period::XWeeksPast => collapse(
            messages,
            Period::OneWeekPast,
            period,
            ratio(minutes, MINUTES_PER_WEEK),
        ),
        Period::XMonthsPast => collapse(
            messages,
            Period::AboutAMonthPast,
            period,
            ratio(minutes, MINUTES_PER_MONTH),
        ),
        Period::XYearsPast => messages.message_with(period.key(), ratio(minutes, MINUTES_PER_YEAR)),
        Period::XMinutesFuture => messages.message_with(period.key(), minutes.abs()),
        Period::XHoursFuture => {
            let hours = ratio(minutes, MINUTES_PER_HOUR).abs();
            if hours == 24 {
                messages.message(Period::OneDayFuture.key())
            } else {
                collapse(messages, Period::AboutAnHourFuture, period, hours)
            }
        }
        Period::XDaysFuture => collapse(
            messages,
            Period::OneDayFuture,
            period,
            ratio(minutes, MINUTES_PER_DAY).abs(),
        ),
        Period::XMonthsFuture => {
            let months = ratio(minutes, MINUTES_PER_MONTH).abs();
            if months == 12 {
                messages.message(Period::AboutAYearFuture.key())
            } else {
                collapse(messages, Period::AboutAMonthFuture, period, months)
            }
        }
        Period::XYearsFuture => {
            messages.message_with(period.key(), ratio(minutes, MINUTES_PER_YEAR).abs())
        }
        _ => messages.message(period.key()),
    }
}

fn ratio(minutes: i64, unit: i64) -> i64 {
    round_half_up(minutes as f64 / unit as f64)
}

/// A count of one shows the singular phrase instead of "1 <unit>".
fn collapse(messages: &Messages, singular: Period, plural: Period, value: i64) -> String {
    if value == 1 {
        messages.message(singular.key())
    } else {
        messages.message_with(plural.key(), value)
    }
}
