use basket_shared::Result;
use time::{Month, OffsetDateTime};

/// Items in season during a set of calendar months.
#[derive(Debug)]
pub struct SeasonalBlock {
    pub months: &'static [Month],
    pub items: &'static [&'static str],
}

/// Month sets are expected not to overlap; the first matching block wins.
pub static SEASONAL: &[SeasonalBlock] = &[
    SeasonalBlock {
        months: &[
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
        ],
        items: &["mango", "buttermilk", "watermelon"],
    },
    SeasonalBlock {
        months: &[
            Month::November,
            Month::December,
            Month::January,
            Month::February,
        ],
        items: &["jaggery", "groundnuts", "ghee"],
    },
    SeasonalBlock {
        months: &[Month::August, Month::September, Month::October],
        items: &["apple", "pomegranate", "guava"],
    },
];

pub fn seasonal(month: Month) -> Vec<String> {
    seasonal_in(SEASONAL, month)
}

/// Items of the first block in `blocks` covering `month`, or nothing.
pub fn seasonal_in(blocks: &[SeasonalBlock], month: Month) -> Vec<String> {
    blocks
        .iter()
        .find(|block| block.months.contains(&month))
        .map(|block| block.items.iter().map(|i| (*i).to_owned()).collect())
        .unwrap_or_default()
}

/// Seasonal items for a month number (1 = January).
pub fn seasonal_for(month: u8) -> Result<Vec<String>> {
    let Ok(month) = Month::try_from(month) else {
        basket_shared::user!("month must be between 1 and 12, got {month}");
    };

    Ok(seasonal(month))
}

pub fn current_month() -> Month {
    OffsetDateTime::now_utc().month()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_in_block_returns_its_items() {
        assert_eq!(seasonal(Month::March), ["mango", "buttermilk", "watermelon"]);
        assert_eq!(seasonal(Month::July), ["mango", "buttermilk", "watermelon"]);
        assert_eq!(seasonal(Month::January), ["jaggery", "groundnuts", "ghee"]);
        assert_eq!(seasonal(Month::October), ["apple", "pomegranate", "guava"]);
    }

    #[test]
    fn test_uncovered_month_is_empty() {
        let blocks = [SeasonalBlock {
            months: &[Month::May],
            items: &["mango"],
        }];

        assert_eq!(seasonal_in(&blocks, Month::May), ["mango"]);
        assert!(seasonal_in(&blocks, Month::June).is_empty());
        assert!(seasonal_in(&[], Month::June).is_empty());
    }

    #[test]
    fn test_first_declared_block_wins() {
        let blocks = [
            SeasonalBlock {
                months: &[Month::May, Month::June],
                items: &["mango"],
            },
            SeasonalBlock {
                months: &[Month::June],
                items: &["lychee"],
            },
        ];

        assert_eq!(seasonal_in(&blocks, Month::June), ["mango"]);
    }

    #[test]
    fn test_every_month_is_covered_once() {
        for n in 1..=12u8 {
            let month = Month::try_from(n).unwrap();
            let hits = SEASONAL
                .iter()
                .filter(|block| block.months.contains(&month))
                .count();
            assert_eq!(hits, 1, "{month} should be in exactly one block");
        }
    }

    #[test]
    fn test_seasonal_for_rejects_out_of_range() {
        assert!(seasonal_for(0).unwrap_err().is_validation());
        assert!(seasonal_for(13).unwrap_err().is_validation());
        assert_eq!(seasonal_for(8).unwrap(), ["apple", "pomegranate", "guava"]);
    }

    #[test]
    fn test_current_month_has_suggestions() {
        assert!(!seasonal(current_month()).is_empty());
    }
}
