// Rating summary formatting.
// Picks one of four message categories for a rating count.

/// Message category for a rating count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSummary {
    NoRatings,
    One,
    /// 2 through 49 ratings.
    Few(u64),
    /// 50 or more ratings.
    Many(u64),
}

impl RatingSummary {
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => RatingSummary::NoRatings,
            1 => RatingSummary::One,
            2..=49 => RatingSummary::Few(count),
            _ => RatingSummary::Many(count),
        }
    }
}

/// Localized templates for each category. `{count}` is replaced with the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMessages {
    pub no_ratings: String,
    pub one: String,
    pub few: String,
    pub many: String,
}

impl Default for SummaryMessages {
    fn default() -> Self {
        Self::english()
    }
}

impl SummaryMessages {
    pub fn english() -> Self {
        Self {
            no_ratings: "No one has rated this version yet".to_string(),
            one: "Only 1 person has rated this version".to_string(),
            few: "Only {count} people have rated this version".to_string(),
            many: "{count} people have rated this version".to_string(),
        }
    }

    pub fn format(&self, summary: RatingSummary) -> String {
        match summary {
            RatingSummary::NoRatings => self.no_ratings.clone(),
            RatingSummary::One => self.one.clone(),
            RatingSummary::Few(count) => self.few.replace("{count}", &count.to_string()),
            RatingSummary::Many(count) => self.many.replace("{count}", &count.to_string()),
        }
    }
}

/// Summary line for a rating count, or `None` when the count is unknown.
pub fn localized_rating_summary(count: Option<u64>, messages: &SummaryMessages) -> Option<String> {
    count.map(|count| messages.format(RatingSummary::from_count(count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(count: u64) -> String {
        localized_rating_summary(Some(count), &SummaryMessages::english()).unwrap()
    }

    #[test]
    fn test_categories() {
        assert_eq!(RatingSummary::from_count(0), RatingSummary::NoRatings);
        assert_eq!(RatingSummary::from_count(1), RatingSummary::One);
        assert_eq!(RatingSummary::from_count(2), RatingSummary::Few(2));
        assert_eq!(RatingSummary::from_count(49), RatingSummary::Few(49));
        assert_eq!(RatingSummary::from_count(50), RatingSummary::Many(50));
    }

    #[test]
    fn test_english_messages() {
        assert_eq!(english(0), "No one has rated this version yet");
        assert_eq!(english(1), "Only 1 person has rated this version");
        assert_eq!(english(2), "Only 2 people have rated this version");
        assert_eq!(english(49), "Only 49 people have rated this version");
        assert_eq!(english(50), "50 people have rated this version");
    }

    #[test]
    fn test_unknown_count_has_no_summary() {
        assert!(localized_rating_summary(None, &SummaryMessages::default()).is_none());
    }

    #[test]
    fn test_custom_messages() {
        let messages = SummaryMessages {
            no_ratings: "Sin valoraciones".to_string(),
            one: "Una valoración".to_string(),
            few: "Solo {count} valoraciones".to_string(),
            many: "{count} valoraciones".to_string(),
        };
        assert_eq!(
            localized_rating_summary(Some(7), &messages),
            Some("Solo 7 valoraciones".to_string())
        );
    }
}
