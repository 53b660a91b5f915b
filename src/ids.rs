use chrono::Utc;
use diesel::QueryResult;

/// Two-letter prefix for a human-readable admin id. Unknown roles fall
/// back to the plain admin prefix.
pub fn admin_role_prefix(role: &str) -> &'static str {
    match role.to_lowercase().as_str() {
        "superadmin" => "SA",
        "admin" => "AD",
        "mentor" => "MT",
        _ => "AD",
    }
}

pub const USER_PREFIX: &str = "US";

/// Formats `<PREFIX>/IN/<2-digit-year>/<4-digit-sequence>`.
pub fn format_custom_id(prefix: &str, year_short: &str, sequence: i64) -> String {
    format!("{}/IN/{}/{:04}", prefix, year_short, sequence)
}

pub fn current_year_short() -> String {
    Utc::now().format("%y").to_string()
}

/// Report ids are `DR-<epoch-ms>` / `WR-<epoch-ms>`. Callers bump the
/// millisecond value until the id is free, so two reports created in the
/// same millisecond still get distinct ids.
pub fn report_id(prefix: &str, epoch_millis: i64) -> String {
    format!("{}-{}", prefix, epoch_millis)
}

/// Walks the sequence upward from `start_sequence` until `taken` reports
/// a free custom id. The predicate is a lookup against the live table in
/// production.
pub fn next_custom_id(
    prefix: &str,
    year_short: &str,
    start_sequence: i64,
    mut taken: impl FnMut(&str) -> QueryResult<bool>,
) -> QueryResult<String> {
    let mut sequence = start_sequence;
    loop {
        let candidate = format_custom_id(prefix, year_short, sequence);
        if !taken(&candidate)? {
            return Ok(candidate);
        }
        sequence += 1;
    }
}

/// Bumps the millisecond stamp until `taken` reports a free report id.
pub fn next_report_id(
    prefix: &str,
    start_millis: i64,
    mut taken: impl FnMut(&str) -> QueryResult<bool>,
) -> QueryResult<String> {
    let mut millis = start_millis;
    loop {
        let candidate = report_id(prefix, millis);
        if !taken(&candidate)? {
            return Ok(candidate);
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_map_by_role() {
        assert_eq!(admin_role_prefix("superadmin"), "SA");
        assert_eq!(admin_role_prefix("Admin"), "AD");
        assert_eq!(admin_role_prefix("MENTOR"), "MT");
        assert_eq!(admin_role_prefix("intern"), "AD");
    }

    #[test]
    fn custom_id_has_four_segments_and_padded_sequence() {
        let id = format_custom_id("MT", "24", 7);
        assert_eq!(id, "MT/IN/24/0007");
        let parts: Vec<&str> = id.split('/').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], "IN");
        assert_eq!(parts[3].len(), 4);
    }

    #[test]
    fn sequence_wider_than_four_digits_is_not_truncated() {
        assert_eq!(format_custom_id("US", "25", 12345), "US/IN/25/12345");
    }

    #[test]
    fn report_id_is_prefix_dash_digits() {
        let id = report_id("DR", 1724912345678);
        let (prefix, digits) = id.split_once('-').unwrap();
        assert_eq!(prefix, "DR");
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn custom_id_loop_skips_taken_sequences() {
        let existing = ["MT/IN/24/0003", "MT/IN/24/0004"];
        let id = next_custom_id("MT", "24", 3, |candidate| {
            Ok(existing.contains(&candidate))
        })
        .unwrap();
        assert_eq!(id, "MT/IN/24/0005");
    }

    #[test]
    fn custom_id_loop_takes_first_free_slot() {
        let id = next_custom_id("US", "25", 12, |_| Ok(false)).unwrap();
        assert_eq!(id, "US/IN/25/0012");
    }

    #[test]
    fn report_id_loop_yields_distinct_ids_within_one_millisecond() {
        // Two submissions landing on the same clock reading must not
        // collide.
        let mut issued: Vec<String> = Vec::new();
        for _ in 0..2 {
            let id = next_report_id("DR", 1724912345678, |candidate| {
                Ok(issued.iter().any(|taken| taken == candidate))
            })
            .unwrap();
            issued.push(id);
        }
        assert_eq!(issued[0], "DR-1724912345678");
        assert_eq!(issued[1], "DR-1724912345679");
        assert_ne!(issued[0], issued[1]);
    }

    #[test]
    fn id_loops_propagate_lookup_errors() {
        let err = next_report_id("WR", 1, |_| Err(diesel::result::Error::NotFound));
        assert!(err.is_err());
    }
}
