// SPDX-License-Identifier: MIT

use super::*;

#[yare::parameterized(
    minute_only   = { CronSchedule { minute: Some(30), ..Default::default() } },
    hour_only     = { CronSchedule { hour: Some(9), ..Default::default() } },
    daily_at_nine = { CronSchedule { minute: Some(0), hour: Some(9), ..Default::default() } },
    weekly_sunday = { CronSchedule { weekday: Some(0), hour: Some(8), ..Default::default() } },
    yearly        = { CronSchedule { month: Some(12), day: Some(31), ..Default::default() } },
    edge_values   = { CronSchedule { minute: Some(59), hour: Some(23), day: Some(31), weekday: Some(6), month: Some(12) } },
)]
fn valid_schedules(schedule: CronSchedule) {
    assert!(schedule.validate().is_ok());
}

#[yare::parameterized(
    minute_too_big  = { CronSchedule { minute: Some(60), ..Default::default() }, "minute" },
    hour_too_big    = { CronSchedule { hour: Some(24), ..Default::default() }, "hour" },
    day_zero        = { CronSchedule { day: Some(0), ..Default::default() }, "day" },
    day_too_big     = { CronSchedule { day: Some(32), ..Default::default() }, "day" },
    weekday_too_big = { CronSchedule { weekday: Some(7), ..Default::default() }, "weekday" },
    month_zero      = { CronSchedule { month: Some(0), ..Default::default() }, "month" },
    month_too_big   = { CronSchedule { month: Some(13), ..Default::default() }, "month" },
)]
fn out_of_range_fields(schedule: CronSchedule, field: &str) {
    let err = schedule.validate().unwrap_err();
    match err {
        SpecError::CronFieldOutOfRange { field: f, .. } => assert_eq!(f, field),
        other => panic!("expected range error, got {:?}", other),
    }
}

#[test]
fn empty_schedule_is_rejected() {
    let schedule = CronSchedule::default();
    assert!(schedule.is_empty());
    assert_eq!(schedule.validate(), Err(SpecError::EmptyCronSchedule));
}

#[test]
fn range_error_message_names_bounds() {
    let schedule = CronSchedule {
        minute: Some(75),
        ..Default::default()
    };
    let msg = schedule.validate().unwrap_err().to_string();
    assert_eq!(msg, "cron minute must be 0-59, got 75");
}
