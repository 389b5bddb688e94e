use crate::format::{format_count, percentage_of};
use crate::{ResultsState, SubmissionState, Tally, VoteOption};

/// Mutually exclusive rendering mode for the results section.
///
/// Precedence is strict: a fetch in flight wins over an error, an error
/// wins over an empty tally, and only a non-empty loaded tally is
/// `Populated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Error,
    Empty,
    Populated,
}

/// Display values for one vote option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub option: VoteOption,
    pub count: u64,
    /// `count` with grouping separators.
    pub count_label: String,
    /// Percentage of the total, one fractional digit.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub display_mode: DisplayMode,
    /// Always both options, cats first.
    pub rows: Vec<ResultRow>,
    pub total_votes: u64,
    pub is_empty: bool,
    /// Grouped total, present only when a total line should render.
    pub total_label: Option<String>,
    pub results_error: Option<String>,
    pub is_submitting: bool,
    pub confirmed: Option<VoteOption>,
    pub submit_error: Option<String>,
    pub can_vote: bool,
}

/// Stateless projection of the two state machines into display values.
pub fn build_view_model(results: &ResultsState, submission: &SubmissionState) -> AppViewModel {
    let tally = match results {
        ResultsState::Loaded(tally) => *tally,
        ResultsState::Loading | ResultsState::Failed(_) => Tally::default(),
    };
    let total = tally.total();

    let display_mode = match results {
        ResultsState::Loading => DisplayMode::Loading,
        ResultsState::Failed(_) => DisplayMode::Error,
        ResultsState::Loaded(_) if total == 0 => DisplayMode::Empty,
        ResultsState::Loaded(_) => DisplayMode::Populated,
    };

    let rows = VoteOption::ALL
        .iter()
        .map(|&option| {
            let count = tally.count(option);
            ResultRow {
                option,
                count,
                count_label: format_count(count),
                percentage: percentage_of(count, total),
            }
        })
        .collect();

    let total_label = match display_mode {
        DisplayMode::Populated => Some(format_count(total)),
        _ => None,
    };

    let results_error = match results {
        ResultsState::Failed(message) => Some(message.clone()),
        _ => None,
    };

    let is_submitting = matches!(submission, SubmissionState::Submitting(_));
    let confirmed = match submission {
        SubmissionState::Succeeded(option) => Some(*option),
        _ => None,
    };
    let submit_error = match submission {
        SubmissionState::Failed(message) => Some(message.clone()),
        _ => None,
    };

    AppViewModel {
        display_mode,
        rows,
        total_votes: total,
        is_empty: total == 0,
        total_label,
        results_error,
        is_submitting,
        confirmed,
        submit_error,
        can_vote: matches!(submission, SubmissionState::Idle | SubmissionState::Failed(_)),
    }
}
