use chrono::{DateTime, Duration, Utc};

/// Client-side lockout rules: 5 consecutive failures lock sign-in for
/// 15 minutes. Enforced only in this client; the counters live in the same
/// storage the session does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    pub max_attempts: u32,
    pub lockout_minutes: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_minutes: 15,
        }
    }
}

/// Result of registering one failed sign-in attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Still below the limit; this many attempts remain.
    Remaining(u32),
    /// The limit was hit; locked until the given instant.
    LockedOut(DateTime<Utc>),
}

impl LockoutPolicy {
    pub fn register_failure(&self, previous_failures: u32, now: DateTime<Utc>) -> AttemptOutcome {
        let failures = previous_failures + 1;
        if failures >= self.max_attempts {
            AttemptOutcome::LockedOut(now + Duration::minutes(self.lockout_minutes))
        } else {
            AttemptOutcome::Remaining(self.max_attempts - failures)
        }
    }

    pub fn is_locked(&self, lockout_end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now < lockout_end
    }

    /// Whole minutes left, rounded up, for the countdown message.
    pub fn remaining_minutes(&self, lockout_end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        let seconds = (lockout_end - now).num_seconds().max(0);
        (seconds + 59) / 60
    }
}

/// "14 minutes" / "1 minute", as shown in the lockout alert.
pub fn remaining_label(minutes: i64) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, second).unwrap()
    }

    #[test]
    fn test_first_four_failures_leave_attempts_remaining() {
        let policy = LockoutPolicy::default();
        for previous in 0..4u32 {
            match policy.register_failure(previous, at(0, 0)) {
                AttemptOutcome::Remaining(left) => assert_eq!(left, 4 - previous),
                AttemptOutcome::LockedOut(_) if previous < 4 => {
                    panic!("locked out after {} failures", previous + 1)
                }
                AttemptOutcome::LockedOut(_) => {}
            }
        }
    }

    #[test]
    fn test_fifth_failure_locks_for_fifteen_minutes() {
        let policy = LockoutPolicy::default();
        match policy.register_failure(4, at(0, 0)) {
            AttemptOutcome::LockedOut(end) => assert_eq!(end, at(15, 0)),
            AttemptOutcome::Remaining(_) => panic!("fifth failure must lock"),
        }
    }

    #[test]
    fn test_lockout_lifts_exactly_at_deadline() {
        let policy = LockoutPolicy::default();
        let end = at(15, 0);
        assert!(policy.is_locked(end, at(14, 59)));
        assert!(!policy.is_locked(end, at(15, 0)));
    }

    #[test]
    fn test_remaining_minutes_rounds_up() {
        let policy = LockoutPolicy::default();
        let end = at(15, 0);
        assert_eq!(policy.remaining_minutes(end, at(0, 1)), 15);
        assert_eq!(policy.remaining_minutes(end, at(14, 1)), 1);
        assert_eq!(policy.remaining_minutes(end, at(15, 0)), 0);
    }

    #[test]
    fn test_remaining_label_pluralizes() {
        assert_eq!(remaining_label(1), "1 minute");
        assert_eq!(remaining_label(15), "15 minutes");
    }
}
