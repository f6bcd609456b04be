//! Salary distribution statistics.

use serde::Serialize;
use utoipa::ToSchema;

use super::format::{count_as_f64, mean, round_to};

/// How widely salaries vary around their average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpreadLevel {
    Low,
    Medium,
    High,
}

impl SpreadLevel {
    /// `High` above 30% of the average, `Medium` above 15%.
    #[must_use]
    pub fn classify(standard_deviation: f64, average: f64) -> Self {
        if standard_deviation > average * 0.3 {
            Self::High
        } else if standard_deviation > average * 0.15 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Low => "Низкий разброс зарплат",
            Self::Medium => "Средний разброс зарплат",
            Self::High => "Высокий разброс зарплат",
        }
    }
}

/// Summary statistics over a non-empty set of salaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalarySpread {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub standard_deviation: f64,
    pub level: SpreadLevel,
}

impl SalarySpread {
    /// Compute the spread; `None` for an empty slice.
    ///
    /// The deviation is the sample standard deviation rounded to kopecks,
    /// and zero for a single salary.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::reports::{SalarySpread, SpreadLevel};
    ///
    /// let spread = SalarySpread::from_salaries(&[10_000.0, 20_000.0, 30_000.0]).unwrap();
    /// assert_eq!(spread.average, 20_000.0);
    /// assert_eq!(spread.range(), 20_000.0);
    /// assert_eq!(spread.level, SpreadLevel::High);
    /// ```
    #[must_use]
    pub fn from_salaries(salaries: &[f64]) -> Option<Self> {
        let min = salaries.iter().copied().reduce(f64::min)?;
        let max = salaries.iter().copied().reduce(f64::max)?;
        let average = mean(salaries);
        let standard_deviation = match salaries.len() {
            0 | 1 => 0.0,
            count => {
                let squares: f64 = salaries
                    .iter()
                    .map(|salary| (salary - average).powi(2))
                    .sum();
                round_to((squares / count_as_f64(count - 1)).sqrt(), 2)
            }
        };
        Some(Self {
            count: salaries.len(),
            total: salaries.iter().sum(),
            average,
            min,
            max,
            standard_deviation,
            level: SpreadLevel::classify(standard_deviation, average),
        })
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}
