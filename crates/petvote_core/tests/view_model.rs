use std::sync::Once;

use petvote_core::{
    build_view_model, DisplayMode, ResultsState, SubmissionState, Tally, VoteOption,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vote_logging::initialize_for_tests);
}

fn loaded(cats: u64, dogs: u64) -> ResultsState {
    ResultsState::Loaded(Tally { cats, dogs })
}

#[test]
fn two_to_one_split() {
    init_logging();
    let view = build_view_model(&loaded(200, 100), &SubmissionState::Idle);

    assert_eq!(view.display_mode, DisplayMode::Populated);
    assert_eq!(view.rows[0].option, VoteOption::Cats);
    assert_eq!(view.rows[0].percentage, "66.7");
    assert_eq!(view.rows[1].option, VoteOption::Dogs);
    assert_eq!(view.rows[1].percentage, "33.3");
}

#[test]
fn uneven_split_keeps_precision() {
    init_logging();
    let view = build_view_model(&loaded(1, 2), &SubmissionState::Idle);

    assert_eq!(view.rows[0].percentage, "33.3");
    assert_eq!(view.rows[1].percentage, "66.7");
    assert_eq!(view.total_votes, 3);
}

#[test]
fn even_split() {
    init_logging();
    let view = build_view_model(&loaded(500, 500), &SubmissionState::Idle);

    assert_eq!(view.rows[0].percentage, "50.0");
    assert_eq!(view.rows[1].percentage, "50.0");
}

#[test]
fn empty_tally_shows_empty_state() {
    init_logging();
    let view = build_view_model(&loaded(0, 0), &SubmissionState::Idle);

    assert_eq!(view.display_mode, DisplayMode::Empty);
    assert!(view.is_empty);
    assert_eq!(view.rows[0].percentage, "0.0");
    assert_eq!(view.rows[1].percentage, "0.0");
    // No total-votes line when nothing has been counted.
    assert_eq!(view.total_label, None);
}

#[test]
fn counts_carry_grouping_separators() {
    init_logging();
    let view = build_view_model(&loaded(1234, 5678), &SubmissionState::Idle);

    assert_eq!(view.rows[0].count_label, "1,234");
    assert_eq!(view.rows[1].count_label, "5,678");
    assert_eq!(view.total_label.as_deref(), Some("6,912"));
}

#[test]
fn loading_mode_suppresses_counts() {
    init_logging();
    let view = build_view_model(&ResultsState::Loading, &SubmissionState::Idle);

    assert_eq!(view.display_mode, DisplayMode::Loading);
    assert_eq!(view.total_votes, 0);
    assert_eq!(view.total_label, None);
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn error_mode_carries_message() {
    init_logging();
    let view = build_view_model(
        &ResultsState::Failed("Network error. Please check your connection.".to_string()),
        &SubmissionState::Idle,
    );

    assert_eq!(view.display_mode, DisplayMode::Error);
    assert_eq!(
        view.results_error.as_deref(),
        Some("Network error. Please check your connection.")
    );
    assert_eq!(view.total_label, None);
}

#[test]
fn submission_projection() {
    init_logging();
    let results = loaded(1, 0);

    let submitting = build_view_model(&results, &SubmissionState::Submitting(VoteOption::Cats));
    assert!(submitting.is_submitting);
    assert!(!submitting.can_vote);

    let succeeded = build_view_model(&results, &SubmissionState::Succeeded(VoteOption::Cats));
    assert_eq!(succeeded.confirmed, Some(VoteOption::Cats));
    assert!(!succeeded.can_vote);

    let failed = build_view_model(
        &results,
        &SubmissionState::Failed("Server error. Please try again later.".to_string()),
    );
    assert_eq!(
        failed.submit_error.as_deref(),
        Some("Server error. Please try again later.")
    );
    assert!(failed.can_vote);
}
