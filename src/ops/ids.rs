use chrono::Utc;

/// Current wall-clock time in milliseconds, the basis for new ids
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Next id for a collection: the creation timestamp, bumped past every
/// numeric id already present so ids stay unique and increasing even when
/// two items are created within the same millisecond.
///
/// Stored ids are arbitrary strings. When the largest numeric one leaves no
/// room above it, the id becomes `<now>-<n>` with the first free `n`.
pub fn next_id<'a>(existing: impl IntoIterator<Item = &'a str>, now_ms: i64) -> String {
    let existing: Vec<&str> = existing.into_iter().collect();
    let now = i128::from(now_ms);
    let max = existing
        .iter()
        .filter_map(|id| id.parse::<i128>().ok())
        .max();
    match max {
        Some(m) if m >= now => match m.checked_add(1) {
            Some(next) => next.to_string(),
            None => suffixed_id(&existing, now_ms),
        },
        _ => now_ms.to_string(),
    }
}

fn suffixed_id(existing: &[&str], now_ms: i64) -> String {
    (1u64..)
        .map(|n| format!("{}-{}", now_ms, n))
        .find(|candidate| !existing.contains(&candidate.as_str()))
        .unwrap_or_else(|| now_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_timestamp_when_free() {
        assert_eq!(next_id(["1", "2"], 1_700_000_000_000), "1700000000000");
        assert_eq!(next_id([], 42), "42");
    }

    #[test]
    fn bumps_past_collisions() {
        assert_eq!(next_id(["100"], 100), "101");
        assert_eq!(next_id(["100", "250"], 120), "251");
    }

    #[test]
    fn bumps_past_the_largest_stored_id() {
        let max = i64::MAX.to_string();
        assert_eq!(next_id([max.as_str()], 100), "9223372036854775808");
    }

    #[test]
    fn falls_back_to_suffix_when_no_room_is_left() {
        let max = i128::MAX.to_string();
        assert_eq!(next_id([max.as_str()], 5), "5-1");
        assert_eq!(next_id([max.as_str(), "5-1"], 5), "5-2");
    }

    #[test]
    fn ignores_non_numeric_ids() {
        assert_eq!(next_id(["abc", "x-9"], 7), "7");
    }
}
