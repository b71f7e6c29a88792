//! Classical hypothesis tests for exploratory analysis
//!
//! Each test returns a [`TestOutcome`] (statistic and p-value). Judging the
//! outcome against a significance level is a separate, pure step through
//! [`Decision`] and [`TestReport`].
//!
//! | Test | Columns | Missing values |
//! |------|---------|----------------|
//! | Shapiro-Wilk | 1 | dropped |
//! | Levene | 2+ | dropped per column |
//! | t test, independent | 2 | dropped per column |
//! | t test, paired | 2 | incomplete rows dropped |
//! | One-way ANOVA | 2+ | dropped per column |
//! | Wilcoxon signed-rank | 1 or 2 | incomplete rows dropped |
//! | Mann-Whitney U | 2 | dropped per column |
//! | Friedman | 3+ | incomplete rows dropped |
//! | Kruskal-Wallis | 2+ | dropped per column |
//!
//! # Example
//!
//! ```rust
//! use explore_core::NamedColumn;
//! use explore_hypothesis::{run_test, Decision, StatTest, TestOptions, TestReport};
//!
//! let control = NamedColumn::from_observations("control", &[5.1, 4.9, 6.2, 5.8, 6.0]);
//! let treated = NamedColumn::from_observations("treated", &[6.9, 7.4, 6.1, 8.0, 7.7]);
//!
//! let outcome = run_test(
//!     StatTest::TTestIndependent,
//!     &[control, treated],
//!     &TestOptions::default(),
//! )
//! .unwrap();
//!
//! let report = TestReport::new(outcome, 0.05).unwrap();
//! assert_eq!(report.decision(), Decision::RejectNull);
//! println!("{report}");
//! ```

pub mod distributions;
mod interpret;
mod nonparametric;
mod normality;
mod parametric;
mod ranks;
mod runner;
mod types;
mod variance;

pub use interpret::{Decision, TestReport};
pub use nonparametric::{
    friedman, kruskal_wallis, mann_whitney, wilcoxon, wilcoxon_paired,
    MANN_WHITNEY_EXACT_MAX_N, WILCOXON_EXACT_MAX_N,
};
pub use normality::{shapiro_wilk, shapiro_wilk_sorted};
pub use parametric::{one_way_anova, ttest_independent, ttest_paired};
pub use ranks::{average_ranks, tie_term};
pub use runner::{run_test, shapiro_each, ColumnOutcome};
pub use types::{Arity, PValueMethod, StatTest, TestOptions, TestOutcome};
pub use variance::levene;
