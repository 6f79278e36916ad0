use chrono::{DateTime, Utc};

use crate::models::promotional_message::PromotionalMessage;

/// Pick the banner to show at `now`.
///
/// Eligible messages are active with `start_date <= now <= end_date`. Among
/// them the most recently created wins; equal `created_at` falls back to the
/// highest id. Returns `None` when nothing is eligible.
pub fn select_active_message<'a, I>(
    now: DateTime<Utc>,
    messages: I,
) -> Option<&'a PromotionalMessage>
where
    I: IntoIterator<Item = &'a PromotionalMessage>,
{
    messages
        .into_iter()
        .filter(|m| m.is_eligible_at(now))
        .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn message(
        id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> PromotionalMessage {
        PromotionalMessage {
            id,
            title: format!("Message {id}"),
            content: format!("<p>Body {id}</p>"),
            start_date: start,
            end_date: end,
            message_type: "info".into(),
            is_active,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn empty_store_selects_nothing() {
        let messages: Vec<PromotionalMessage> = Vec::new();
        assert!(select_active_message(now(), &messages).is_none());
    }

    #[test]
    fn latest_created_wins() {
        let t0 = now() - Duration::days(3);
        let window = (now() - Duration::days(1), now() + Duration::days(1));
        let a = message(1, window.0, window.1, true, t0);
        let b = message(2, window.0, window.1, true, t0 + Duration::hours(1));

        let messages = vec![b.clone(), a];
        assert_eq!(select_active_message(now(), &messages), Some(&b));
    }

    #[test]
    fn future_window_is_excluded() {
        let c = message(
            1,
            now() + Duration::days(60),
            now() + Duration::days(65),
            true,
            now() - Duration::days(1),
        );
        assert!(select_active_message(now(), &[c]).is_none());
    }

    #[test]
    fn expired_window_is_excluded() {
        let m = message(
            1,
            now() - Duration::days(10),
            now() - Duration::seconds(1),
            true,
            now() - Duration::days(11),
        );
        assert!(select_active_message(now(), &[m]).is_none());
    }

    #[test]
    fn inactive_is_excluded_even_inside_window() {
        let d = message(
            1,
            now() - Duration::days(1),
            now() + Duration::days(2),
            false,
            now() - Duration::days(2),
        );
        assert!(select_active_message(now(), &[d]).is_none());
    }

    #[test]
    fn newer_inactive_does_not_shadow_older_active() {
        let window = (now() - Duration::days(1), now() + Duration::days(1));
        let older = message(1, window.0, window.1, true, now() - Duration::days(5));
        let newer = message(2, window.0, window.1, false, now() - Duration::days(1));

        let messages = vec![older.clone(), newer];
        assert_eq!(select_active_message(now(), &messages), Some(&older));
    }

    #[test]
    fn exact_bounds_are_eligible() {
        let starts_now = message(1, now(), now() + Duration::days(1), true, now());
        let ends_now = message(2, now() - Duration::days(1), now(), true, now());
        assert!(select_active_message(now(), &[starts_now]).is_some());
        assert!(select_active_message(now(), &[ends_now]).is_some());
    }

    #[test]
    fn tie_on_created_at_goes_to_highest_id() {
        let created = now() - Duration::days(2);
        let window = (now() - Duration::days(1), now() + Duration::days(1));
        let low = message(7, window.0, window.1, true, created);
        let high = message(9, window.0, window.1, true, created);

        let forward = vec![low.clone(), high.clone()];
        let reverse = vec![high.clone(), low];
        assert_eq!(select_active_message(now(), &forward), Some(&high));
        assert_eq!(select_active_message(now(), &reverse), Some(&high));
    }

    #[test]
    fn explicit_instant_overrides_wall_clock() {
        let window_start = Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let holiday = message(1, window_start, window_end, true, window_start);
        let christmas = Utc.with_ymd_and_hms(2025, 12, 25, 0, 0, 0).unwrap();

        let messages = [holiday.clone()];
        assert_eq!(select_active_message(christmas, &messages), Some(&holiday));
        assert!(select_active_message(now(), &messages).is_none());
    }

    #[test]
    fn selection_does_not_depend_on_input_order() {
        let window = (now() - Duration::days(1), now() + Duration::days(1));
        let mut messages: Vec<_> = (1..=5)
            .map(|i| message(i, window.0, window.1, true, now() - Duration::hours(10 - i)))
            .collect();
        let expected = messages[4].clone();

        assert_eq!(select_active_message(now(), &messages), Some(&expected));
        messages.reverse();
        assert_eq!(select_active_message(now(), &messages), Some(&expected));
    }
}
