use regex::Regex;
use std::sync::OnceLock;

/// Comma grouping needs at least one `,ddd` group; with an optional group, "Rs. 50000"
/// would stop after three digits and read as 500.
const AMOUNT: &str = r"(\d{1,3}(?:,\d{3})+|\d+)";

static INCOME_PATTERNS: OnceLock<Vec<(Regex, i64)>> = OnceLock::new();
static AGE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Spoken ages outside this range are treated as mis-transcriptions.
pub(crate) const PLAUSIBLE_AGE: std::ops::RangeInclusive<i64> = 18..=100;

fn income_patterns() -> &'static [(Regex, i64)] {
    INCOME_PATTERNS.get_or_init(|| {
        let sources = [
            // "Rs. 50,000"
            (format!(r"(?i)rs\.?\s*{AMOUNT}"), 1),
            // "rupees 50,000"
            (format!(r"(?i)rupees\s*{AMOUNT}"), 1),
            // "50,000 rupees"
            (format!(r"(?i){AMOUNT}\s*rupees"), 1),
            // "50k"
            (format!(r"(?i){AMOUNT}k"), 1_000),
        ];
        sources
            .into_iter()
            .filter_map(|(pattern, multiplier)| {
                Regex::new(&pattern).ok().map(|regex| (regex, multiplier))
            })
            .collect()
    })
}

fn age_patterns() -> &'static [Regex] {
    AGE_PATTERNS.get_or_init(|| {
        [
            r"(?i)I am (\d{1,3}) years old",
            r"(?i)I'm (\d{1,3})",
            r"(?i)age (\d{1,3})",
        ]
        .into_iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
    })
}

/// Monthly income mentioned in a transcript; the first pattern that matches wins.
pub fn extract_income(text: &str) -> Option<i64> {
    for (pattern, multiplier) in income_patterns() {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };
        let digits = captures[1].replace(',', "");
        if let Some(amount) = digits
            .parse::<i64>()
            .ok()
            .and_then(|value| value.checked_mul(*multiplier))
        {
            return Some(amount);
        }
    }
    None
}

/// Applicant age mentioned in a transcript. Implausible values fall through to the next pattern.
pub fn extract_age(text: &str) -> Option<i64> {
    age_patterns().iter().find_map(|pattern| {
        let captures = pattern.captures(text)?;
        let age = captures[1].parse::<i64>().ok()?;
        PLAUSIBLE_AGE.contains(&age).then_some(age)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(income_patterns().len(), 4);
        assert_eq!(age_patterns().len(), 3);
    }

    #[test]
    fn income_from_rupee_prefix() {
        assert_eq!(extract_income("My salary is Rs. 50,000 a month"), Some(50_000));
        assert_eq!(extract_income("my salary is rs 42000"), Some(42_000));
        assert_eq!(extract_income("income is RUPEES 61,500"), Some(61_500));
    }

    #[test]
    fn ungrouped_amounts_keep_every_digit() {
        assert_eq!(extract_income("Rs. 50000"), Some(50_000));
        assert_eq!(extract_income("rupees 123456 per month"), Some(123_456));
        assert_eq!(extract_income("I make 1000000 rupees"), Some(1_000_000));
    }

    #[test]
    fn income_from_suffix_forms() {
        assert_eq!(extract_income("I earn 35,000 rupees monthly"), Some(35_000));
        assert_eq!(extract_income("take home is about 45k"), Some(45_000));
        assert_eq!(extract_income("I have no idea"), None);
    }

    #[test]
    fn income_patterns_are_tried_in_order() {
        assert_eq!(
            extract_income("around 40k, or rupees 38000 after tax"),
            Some(38_000)
        );
    }

    #[test]
    fn age_forms_are_recognized() {
        assert_eq!(extract_age("Hello, I am 34 years old"), Some(34));
        assert_eq!(extract_age("i'm 41 and work in sales"), Some(41));
        assert_eq!(extract_age("my AGE 29"), Some(29));
        assert_eq!(extract_age("no numbers here"), None);
    }

    #[test]
    fn implausible_age_falls_through_to_next_pattern() {
        assert_eq!(extract_age("I am 7 years old, age 27 actually"), Some(27));
        assert_eq!(extract_age("I'm 150"), None);
    }
}
