use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTRIBUTIONS_API_URL: &str = "https://github-contributions-api.jogruber.de/v4";

/// Weeks in the grid start on this weekday, matching GitHub's calendar.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Number of years offered by the year selector.
pub const YEARS_SHOWN: i32 = 5;

/// Sample counts rendered in the "Less ... More" legend, one per intensity.
pub const LEGEND_SAMPLES: [u32; 5] = [0, 4, 8, 12, 16];

const MAX_USERNAME_LEN: usize = 39;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContributionError {
    #[error("Year {0} is out of range")]
    InvalidYear(i32),
    #[error("Invalid GitHub username: {0}")]
    InvalidUsername(String),
    #[error("Contributions are not published for {0}")]
    UnknownUser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Upstream document served by the contributions API for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionFeed {
    pub contributions: Vec<ContributionDay>,
    #[serde(default)]
    pub total: BTreeMap<String, u64>,
}

impl ContributionFeed {
    pub fn all_time_total(&self) -> u64 {
        self.total.values().sum()
    }
}

/// One calendar year, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl YearWindow {
    pub fn for_year(year: i32) -> Result<Self, ContributionError> {
        let start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ContributionError::InvalidYear(year))?;
        let end =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ContributionError::InvalidYear(year))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keeps the days inside `window`, ascending by date.
///
/// The input order is not trusted. Duplicate dates are kept in their
/// original relative order rather than merged.
pub fn select_window(all: &[ContributionDay], window: YearWindow) -> Vec<ContributionDay> {
    let mut days = all
        .iter()
        .filter(|day| window.contains(day.date))
        .copied()
        .collect::<Vec<_>>();
    days.sort_by_key(|day| day.date);
    days
}

pub fn total_contributions(days: &[ContributionDay]) -> u64 {
    days.iter().map(|day| u64::from(day.count)).sum()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    days: Vec<ContributionDay>,
}

impl ContributionWeek {
    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }

    /// Empty cells to draw above the first day so rows line up with weekdays.
    pub fn leading_blanks(&self) -> usize {
        self.days
            .first()
            .map(|day| days_into_week(day.date) as usize)
            .unwrap_or_default()
    }
}

fn days_into_week(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_monday() + 7 - WEEK_START.num_days_from_monday()) % 7
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(u64::from(days_into_week(date)))
}

/// Splits date-sorted days into calendar weeks that start on [`WEEK_START`].
///
/// A week is also closed once it holds seven entries, so a week never grows
/// past seven days even when the feed has duplicates.
pub fn bucket_into_weeks(sorted: &[ContributionDay]) -> Vec<ContributionWeek> {
    let mut weeks = Vec::new();
    let mut current: Vec<ContributionDay> = Vec::with_capacity(7);
    for day in sorted {
        let new_week = current
            .first()
            .is_some_and(|first| week_start(first.date) != week_start(day.date));
        if new_week || current.len() == 7 {
            weeks.push(ContributionWeek {
                days: std::mem::take(&mut current),
            });
        }
        current.push(*day);
    }
    if !current.is_empty() {
        weeks.push(ContributionWeek { days: current });
    }
    weeks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Intensity {
    pub fn classify(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=4 => Self::Low,
            5..=9 => Self::Medium,
            10..=14 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "bg-gray-200",
            Self::Low => "bg-[#a7f3d0]",
            Self::Medium => "bg-[#34d399]",
            Self::High => "bg-[#10b981]",
            Self::VeryHigh => "bg-[#047857]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub week_index: usize,
    pub name: String,
}

/// Labels each week whose first day opens a month not yet labelled.
pub fn month_labels(weeks: &[ContributionWeek]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month = None;
    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.days().first() else {
            continue;
        };
        let month = (first.date.year(), first.date.month());
        if last_month != Some(month) {
            labels.push(MonthLabel {
                week_index,
                name: first.date.format("%b").to_string(),
            });
            last_month = Some(month);
        }
    }
    labels
}

/// Everything the heat map renders for one selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionGrid {
    pub year: i32,
    pub weeks: Vec<ContributionWeek>,
    pub total: u64,
    pub all_time_total: u64,
    pub months: Vec<MonthLabel>,
}

impl ContributionGrid {
    pub fn build(feed: &ContributionFeed, year: i32) -> Result<Self, ContributionError> {
        let window = YearWindow::for_year(year)?;
        let days = select_window(&feed.contributions, window);
        let weeks = bucket_into_weeks(&days);
        let months = month_labels(&weeks);
        Ok(Self {
            year,
            total: total_contributions(&days),
            all_time_total: feed.all_time_total(),
            weeks,
            months,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.days().iter())
    }

    pub fn active_days(&self) -> usize {
        self.days().filter(|day| day.count > 0).count()
    }

    pub fn best_day(&self) -> Option<ContributionDay> {
        self.days()
            .filter(|day| day.count > 0)
            .max_by(|a, b| a.count.cmp(&b.count).then(b.date.cmp(&a.date)))
            .copied()
    }

    pub fn month_at(&self, week_index: usize) -> Option<&str> {
        self.months
            .iter()
            .find(|label| label.week_index == week_index)
            .map(|label| label.name.as_str())
    }
}

/// Result of one fetch as the heat map sees it: a grid or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatmapState {
    Ready(ContributionGrid),
    Failed(String),
}

impl HeatmapState {
    pub fn weeks(&self) -> &[ContributionWeek] {
        match self {
            Self::Ready(grid) => &grid.weeks,
            Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Failed(message) => Some(message),
        }
    }
}

impl<E: std::fmt::Display> From<Result<ContributionGrid, E>> for HeatmapState {
    fn from(value: Result<ContributionGrid, E>) -> Self {
        match value {
            Ok(grid) => Self::Ready(grid),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..YEARS_SHOWN).map(|i| current_year - i).collect()
}

pub fn describe_day(day: &ContributionDay) -> String {
    let noun = if day.count == 1 {
        "contribution"
    } else {
        "contributions"
    };
    format!("{} {noun} on {}", day.count, day.date.format("%b %-d, %Y"))
}

pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--")
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub fn check_username(username: &str) -> Result<&str, ContributionError> {
    if is_valid_username(username) {
        Ok(username)
    } else {
        Err(ContributionError::InvalidUsername(username.to_string()))
    }
}

/// Accepts `requested` only when it names the site owner's login.
pub fn check_profile_login<'a>(
    requested: &'a str,
    profile_login: &str,
) -> Result<&'a str, ContributionError> {
    let requested = check_username(requested)?;
    if requested.eq_ignore_ascii_case(profile_login) {
        Ok(requested)
    } else {
        Err(ContributionError::UnknownUser(requested.to_string()))
    }
}
