//! Cron parsing and fire-time calculation.

use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use cron::Schedule;

use cronreg_protocols::{EngineError, EngineResult};

/// Parse a cron expression.
///
/// The Quartz "no specific value" placeholder `?` is accepted and treated as
/// `*`.
pub fn parse_cron(expression: &str) -> EngineResult<Schedule> {
    let normalized = expression.trim().replace('?', "*");
    Schedule::from_str(&normalized).map_err(|e| EngineError::InvalidCronExpression {
        expression: expression.to_string(),
        message: e.to_string(),
    })
}

/// First fire time strictly after `after` that lies inside `[start, end]`.
pub fn first_fire_time(
    schedule: &Schedule,
    after: DateTime<Utc>,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    // `Schedule::after` is exclusive; step back one second so a fire time
    // equal to `start` is kept.
    let from = after.max(start - TimeDelta::seconds(1));
    schedule
        .after(&from)
        .find(|t| *t >= start)
        .filter(|t| end.is_none_or(|end| *t <= end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_parse_quartz_placeholder() {
        assert!(parse_cron("0 0 12 * * ?").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_cron("not a cron").unwrap_err();
        assert!(matches!(err, EngineError::InvalidCronExpression { .. }));
        assert!(err.to_string().contains("not a cron"));
    }

    #[test]
    fn test_first_fire_includes_start() {
        let schedule = parse_cron("0 0 * * * *").unwrap();
        let start = at(10, 0, 0);
        let next = first_fire_time(&schedule, at(9, 0, 0), start, None);
        assert_eq!(next, Some(start));
    }

    #[test]
    fn test_first_fire_after_now() {
        let schedule = parse_cron("0 0 * * * *").unwrap();
        let next = first_fire_time(&schedule, at(10, 30, 0), at(8, 0, 0), None);
        assert_eq!(next, Some(at(11, 0, 0)));
    }

    #[test]
    fn test_first_fire_past_end() {
        let schedule = parse_cron("0 0 * * * *").unwrap();
        let next = first_fire_time(&schedule, at(10, 30, 0), at(8, 0, 0), Some(at(10, 45, 0)));
        assert_eq!(next, None);
    }
}
