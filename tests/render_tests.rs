use std::collections::HashMap;

use timeago::period::Period;
use timeago::{Messages, MessagesBuilder, describe, render};

fn english() -> Messages {
    MessagesBuilder::new().with_locale("en").build()
}

fn say(minutes: i64) -> String {
    describe(minutes, &english())
}

// --- Fixed phrases ---

#[test]
fn test_now() {
    assert_eq!(say(0), "just now");
}

#[test]
fn test_one_minute() {
    assert_eq!(say(1), "one minute ago");
    assert_eq!(say(-1), "in one minute");
}

#[test]
fn test_fixed_phrases_ignore_quantity() {
    assert_eq!(say(60), "about an hour ago");
    assert_eq!(say(2000), "one day ago");
    assert_eq!(say(60_000), "about a month ago");
    assert_eq!(say(600_000), "about a year ago");
    assert_eq!(say(700_000), "over a year ago");
    assert_eq!(say(1_000_000), "almost two years ago");
    assert_eq!(say(-1_000_000), "in almost two years");
}

// --- Past counts ---

#[test]
fn test_minutes_past_use_raw_value() {
    assert_eq!(say(6), "6 minutes ago");
    assert_eq!(say(44), "44 minutes ago");
}

#[test]
fn test_hours_past() {
    assert_eq!(say(90), "2 hours ago");
    assert_eq!(say(300), "5 hours ago");
    // no collapse to a day on the past side
    assert_eq!(say(1439), "24 hours ago");
}

#[test]
fn test_days_past() {
    assert_eq!(say(2520), "2 days ago");
    assert_eq!(say(6 * 1440), "6 days ago");
    assert_eq!(say(10_079), "7 days ago");
}

#[test]
fn test_weeks_past() {
    assert_eq!(say(8 * 1440), "one week ago");
    assert_eq!(say(16 * 1440), "2 weeks ago");
    assert_eq!(say(23 * 1440), "3 weeks ago");
}

#[test]
fn test_months_past() {
    assert_eq!(say(86_400), "2 months ago");
    assert_eq!(say(6 * 43_200), "6 months ago");
    assert_eq!(say(525_599), "12 months ago");
}

#[test]
fn test_years_past() {
    assert_eq!(say(1_051_200), "2 years ago");
    assert_eq!(say(5 * 525_600), "5 years ago");
}

// --- Future counts ---

#[test]
fn test_minutes_future() {
    assert_eq!(say(-6), "in 6 minutes");
    assert_eq!(say(-44), "in 44 minutes");
}

#[test]
fn test_hours_future_collapse_to_about_an_hour() {
    // -1.5 rounds half up to -1
    assert_eq!(say(-90), "in about an hour");
    assert_eq!(say(-91), "in 2 hours");
}

#[test]
fn test_hours_future_rounding_to_a_day() {
    assert_eq!(say(-1410), "in 23 hours");
    assert_eq!(say(-1411), "in one day");
    assert_eq!(say(-1439), "in one day");
    assert_eq!(say(-1440), "in one day");
}

#[test]
fn test_days_future() {
    assert_eq!(say(-2520), "in 2 days");
    assert_eq!(say(-6 * 1440), "in 6 days");
}

#[test]
fn test_week_scale_future_stays_in_days() {
    assert_eq!(say(-8 * 1440), "in 8 days");
    assert_eq!(say(-16 * 1440), "in 16 days");
    assert_eq!(say(-43_199), "in 30 days");
}

#[test]
fn test_months_future() {
    assert_eq!(say(-86_400), "in 2 months");
    assert_eq!(say(-496_800), "in 11 months");
}

#[test]
fn test_twelve_months_future_is_about_a_year() {
    assert_eq!(say(-500_000), "in about a year");
    assert_eq!(say(-525_599), "in about a year");
}

#[test]
fn test_years_future() {
    assert_eq!(say(-1_051_200), "in 2 years");
    assert_eq!(say(-3 * 525_600), "in 3 years");
}

// --- Degraded output ---

#[test]
fn test_missing_key_renders_key() {
    let messages = MessagesBuilder::new()
        .with_locale("en")
        .with_bundle(HashMap::new())
        .build();
    assert_eq!(describe(0, &messages), "ml.timeago.now");
    assert_eq!(describe(6, &messages), "ml.timeago.xminutes.past");
    assert_eq!(describe(-1440, &messages), "ml.timeago.oneday.future");
}

#[test]
fn test_missing_singular_key_renders_singular_key() {
    let bundle = HashMap::from([(
        "ml.timeago.xweeks.past".to_string(),
        "{0} weeks ago".to_string(),
    )]);
    let messages = MessagesBuilder::new()
        .with_locale("en")
        .with_bundle(bundle)
        .build();
    assert_eq!(describe(16 * 1440, &messages), "2 weeks ago");
    assert_eq!(
        render(Period::XWeeksPast, 10_080, &messages),
        "ml.timeago.oneweek.past"
    );
}

#[test]
fn test_malformed_template_is_returned_unsubstituted() {
    let bundle = HashMap::from([(
        "ml.timeago.xminutes.past".to_string(),
        "{0 minutes ago".to_string(),
    )]);
    let messages = MessagesBuilder::new()
        .with_locale("en")
        .with_bundle(bundle)
        .build();
    assert_eq!(describe(6, &messages), "{0 minutes ago");
}

#[test]
fn test_other_locale() {
    let messages = MessagesBuilder::new().with_locale("es").build();
    assert_eq!(describe(6, &messages), "hace 6 minutos");
    assert_eq!(describe(-1439, &messages), "dentro de un día");
    assert_eq!(describe(-500_000, &messages), "dentro de un año");
}
