//! Budget periods
//!
//! A budget recurs weekly, monthly or yearly. The concrete occurrence a budget
//! measures (its [`PeriodInstance`]) is the one containing its start date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a budget recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn all() -> &'static [BudgetPeriod] {
        &[Self::Weekly, Self::Monthly, Self::Yearly]
    }

    /// The occurrence of this period that contains `anchor`
    pub fn instance_containing(&self, anchor: NaiveDate) -> PeriodInstance {
        match self {
            Self::Weekly => {
                let week = anchor.iso_week();
                PeriodInstance::Week {
                    iso_year: week.year(),
                    week: week.week(),
                }
            }
            Self::Monthly => PeriodInstance::Month {
                year: anchor.year(),
                month: anchor.month(),
            },
            Self::Yearly => PeriodInstance::Year {
                year: anchor.year(),
            },
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Self::Yearly),
            _ => Err(PeriodParseError::UnknownPeriod(s.trim().to_string())),
        }
    }
}

/// A concrete occurrence of a budget period, e.g. "March 2024"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodInstance {
    /// ISO week; `iso_year` is the ISO week-numbering year
    Week { iso_year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Year { year: i32 },
}

impl PeriodInstance {
    /// First day of the instance
    pub fn start_date(&self) -> NaiveDate {
        match *self {
            Self::Week { iso_year, week } => NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon),
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1),
            Self::Year { year } => NaiveDate::from_ymd_opt(year, 1, 1),
        }
        .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the instance (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match *self {
            Self::Week { .. } => self.start_date() + Duration::days(6),
            Self::Month { year, month } => {
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                };
                next.and_then(|d| d.pred_opt()).unwrap_or(NaiveDate::MAX)
            }
            Self::Year { year } => NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whether `date` falls inside this instance
    ///
    /// Compared by calendar components rather than by range, so the check
    /// is exact for every variant.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Week { iso_year, week } => {
                let w = date.iso_week();
                w.year() == iso_year && w.week() == week
            }
            Self::Month { year, month } => date.year() == year && date.month() == month,
            Self::Year { year } => date.year() == year,
        }
    }
}

impl fmt::Display for PeriodInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week { iso_year, week } => write!(f, "{:04}-W{:02}", iso_year, week),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    UnknownPeriod(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::UnknownPeriod(s) => {
                write!(f, "Unknown budget period '{}' (expected weekly, monthly or yearly)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_instance() {
        let instance = BudgetPeriod::Monthly.instance_containing(date(2024, 2, 14));
        assert_eq!(instance, PeriodInstance::Month { year: 2024, month: 2 });
        assert_eq!(instance.start_date(), date(2024, 2, 1));
        assert_eq!(instance.end_date(), date(2024, 2, 29));
        assert!(instance.contains(date(2024, 2, 29)));
        assert!(!instance.contains(date(2024, 3, 1)));
        assert!(!instance.contains(date(2023, 2, 14)));
    }

    #[test]
    fn test_december_end_date() {
        let instance = BudgetPeriod::Monthly.instance_containing(date(2024, 12, 5));
        assert_eq!(instance.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_weekly_instance_uses_iso_weeks() {
        // 2024-12-30 is a Monday in ISO week 1 of 2025
        let instance = BudgetPeriod::Weekly.instance_containing(date(2024, 12, 31));
        assert_eq!(instance, PeriodInstance::Week { iso_year: 2025, week: 1 });
        assert_eq!(instance.start_date(), date(2024, 12, 30));
        assert_eq!(instance.end_date(), date(2025, 1, 5));
        assert!(instance.contains(date(2025, 1, 3)));
        assert!(!instance.contains(date(2025, 1, 6)));
        assert!(!instance.contains(date(2024, 12, 29)));
    }

    #[test]
    fn test_yearly_instance() {
        let instance = BudgetPeriod::Yearly.instance_containing(date(2024, 6, 1));
        assert_eq!(instance.start_date(), date(2024, 1, 1));
        assert_eq!(instance.end_date(), date(2024, 12, 31));
        assert!(instance.contains(date(2024, 12, 31)));
        assert!(!instance.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PeriodInstance::Week { iso_year: 2024, week: 3 }.to_string(),
            "2024-W03"
        );
        assert_eq!(PeriodInstance::Month { year: 2024, month: 1 }.to_string(), "2024-01");
        assert_eq!(PeriodInstance::Year { year: 2024 }.to_string(), "2024");
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("Weekly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Weekly);
        assert_eq!("month".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert_eq!("yearly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Yearly);
        assert!("daily".parse::<BudgetPeriod>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BudgetPeriod::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
        let back: BudgetPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BudgetPeriod::Monthly);
    }
}
