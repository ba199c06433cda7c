//! Compact count formatting for like/view counters.

/// Format a counter the way the card and player surfaces show it:
/// `987`, `1.2K`, `15.6K`, `1.0M`.
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_verbatim() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(987), "987");
    }

    #[test]
    fn thousands_get_one_decimal() {
        assert_eq!(compact_count(1203), "1.2K");
        assert_eq!(compact_count(15632), "15.6K");
        assert_eq!(compact_count(98765), "98.8K");
    }

    #[test]
    fn millions_roll_over() {
        assert_eq!(compact_count(1_000_000), "1.0M");
        assert_eq!(compact_count(2_345_678), "2.3M");
    }
}
