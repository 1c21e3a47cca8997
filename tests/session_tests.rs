mod common;

#[cfg(test)]
pub mod session_tests {
    use chrono::Duration;

    use super::common::*;
    use bookdash::services::{AttemptOutcome, SessionKind};

    #[test]
    fn test_stored_token_round_trip_success() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");

        manager.store_token("real-jwt", now);
        let stored = manager.stored_token(now).expect("token must persist");
        assert_eq!(stored.token, "real-jwt");
        assert_eq!(stored.kind, SessionKind::Remote);
    }

    #[test]
    fn test_stored_token_expires_after_a_day() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");

        manager.store_token("real-jwt", now);
        let later = now + Duration::hours(23);
        assert!(manager.stored_token(later).is_some());

        let expired = now + Duration::hours(24);
        assert!(manager.stored_token(expired).is_none());
        // The expired token was removed, not just hidden.
        assert!(manager.stored_token(now).is_none());
    }

    #[test]
    fn test_clear_session_removes_token() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");
        manager.store_token("real-jwt", now);
        manager.clear_session();
        assert!(manager.stored_token(now).is_none());
    }

    #[test]
    fn test_offline_token_is_marked_offline() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");
        let user = manager
            .register_mock_user("reader", "reader@example.com", "Str0ng!pass", now)
            .unwrap();

        let token = manager.issue_offline_token(&user, now);
        manager.store_token(&token, now);

        let stored = manager.stored_token(now).unwrap();
        assert_eq!(stored.kind, SessionKind::Offline);
    }

    #[test]
    fn test_remember_username_round_trip() {
        let manager = new_manager();
        assert_eq!(manager.remembered_username(), None);

        manager.remember_username("reader");
        assert_eq!(manager.remembered_username(), Some("reader".to_string()));

        manager.forget_username();
        assert_eq!(manager.remembered_username(), None);
    }

    #[test]
    fn test_register_mock_user_rejects_duplicate_username() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");

        manager
            .register_mock_user("reader", "reader@example.com", "Str0ng!pass", now)
            .unwrap();
        let duplicate = manager.register_mock_user("reader", "other@example.com", "pw", now);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_register_mock_user_rejects_duplicate_email_case_insensitively() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");

        manager
            .register_mock_user("reader", "reader@example.com", "Str0ng!pass", now)
            .unwrap();
        let duplicate = manager.register_mock_user("other", "Reader@Example.com", "pw", now);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_verify_mock_credentials_success_and_failure() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");
        manager
            .register_mock_user("reader", "reader@example.com", "Str0ng!pass", now)
            .unwrap();

        assert!(manager.verify_mock_credentials("reader", "Str0ng!pass").is_some());
        assert!(manager.verify_mock_credentials(" reader ", "Str0ng!pass").is_some());
        assert!(manager.verify_mock_credentials("reader", "wrong").is_none());
        assert!(manager.verify_mock_credentials("nobody", "Str0ng!pass").is_none());
    }

    #[test]
    fn test_exactly_five_failures_trigger_lockout() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");

        for expected_left in [4u32, 3, 2, 1] {
            match manager.record_failed_attempt(now) {
                AttemptOutcome::Remaining(left) => assert_eq!(left, expected_left),
                AttemptOutcome::LockedOut(_) => panic!("locked out too early"),
            }
            assert!(manager.active_lockout(now).is_none());
        }

        let end = match manager.record_failed_attempt(now) {
            AttemptOutcome::LockedOut(end) => end,
            AttemptOutcome::Remaining(_) => panic!("fifth failure must lock"),
        };
        assert_eq!(end, now + Duration::minutes(15));
        assert_eq!(manager.active_lockout(now), Some(end));
    }

    #[test]
    fn test_lockout_lifts_exactly_at_deadline() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");
        for _ in 0..5 {
            manager.record_failed_attempt(now);
        }

        let just_before = now + Duration::minutes(15) - Duration::seconds(1);
        assert!(manager.active_lockout(just_before).is_some());

        let at_deadline = now + Duration::minutes(15);
        assert!(manager.active_lockout(at_deadline).is_none());
        // Lifting the lockout also resets the counter for a fresh window.
        assert_eq!(manager.failed_attempts(), 0);
    }

    #[test]
    fn test_reset_attempts_clears_counters() {
        let manager = new_manager();
        let now = parse_time("2026-01-04T22:15:06Z");
        manager.record_failed_attempt(now);
        manager.record_failed_attempt(now);
        assert_eq!(manager.failed_attempts(), 2);

        manager.reset_attempts();
        assert_eq!(manager.failed_attempts(), 0);
        assert!(manager.active_lockout(now).is_none());
    }
}
