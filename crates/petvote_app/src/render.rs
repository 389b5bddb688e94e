use petvote_core::{AppViewModel, DisplayMode, ResultRow};

const BAR_CELLS: u64 = 24;

/// Renders the view model as a block of terminal lines.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = vec!["== Cats vs Dogs ==".to_string()];

    match view.display_mode {
        DisplayMode::Loading => lines.push("Loading results...".to_string()),
        DisplayMode::Error => {
            let message = view.results_error.as_deref().unwrap_or("Unknown error");
            lines.push(format!("Results unavailable: {message}"));
        }
        DisplayMode::Empty => lines.push("No votes yet. Be the first to vote!".to_string()),
        DisplayMode::Populated => {
            for row in &view.rows {
                lines.push(format_row(row, view.total_votes));
            }
            if let Some(total) = &view.total_label {
                lines.push(format!("Total votes: {total}"));
            }
        }
    }

    if view.is_submitting {
        lines.push("Submitting your vote...".to_string());
    }
    if let Some(option) = view.confirmed {
        lines.push(format!(
            "You voted for {}! Type `again` to vote again.",
            option.label()
        ));
    }
    if let Some(message) = &view.submit_error {
        lines.push(format!("Vote not recorded: {message}"));
    }
    if view.can_vote {
        lines.push("Vote with `cats` or `dogs`.".to_string());
    }

    lines.join("\n")
}

fn format_row(row: &ResultRow, total: u64) -> String {
    let filled = if total == 0 {
        0
    } else {
        (u128::from(row.count) * u128::from(BAR_CELLS) / u128::from(total)) as usize
    };
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS as usize - filled)
    );
    format!(
        "{:<4} {:>5}% [{bar}] {} votes",
        row.option.label(),
        row.percentage,
        row.count_label
    )
}

#[cfg(test)]
mod tests {
    use super::render;
    use petvote_core::{build_view_model, ResultsState, SubmissionState, Tally};

    fn loaded(cats: u64, dogs: u64) -> ResultsState {
        ResultsState::Loaded(Tally { cats, dogs })
    }

    #[test]
    fn populated_view_shows_percentages_and_total() {
        let view = build_view_model(&loaded(200, 100), &SubmissionState::Idle);
        let out = render(&view);

        assert!(out.contains("66.7%"));
        assert!(out.contains("33.3%"));
        assert!(out.contains("Total votes: 300"));
    }

    #[test]
    fn empty_view_has_no_total_line() {
        let view = build_view_model(&loaded(0, 0), &SubmissionState::Idle);
        let out = render(&view);

        assert!(out.contains("No votes yet."));
        assert!(!out.contains("Total votes:"));
    }

    #[test]
    fn loading_view_suppresses_the_grid() {
        let view = build_view_model(&ResultsState::Loading, &SubmissionState::Idle);
        let out = render(&view);

        assert!(out.contains("Loading results..."));
        assert!(!out.contains("votes"));
    }

    #[test]
    fn error_view_shows_the_message() {
        let view = build_view_model(
            &ResultsState::Failed("Network error. Please check your connection.".to_string()),
            &SubmissionState::Idle,
        );
        let out = render(&view);

        assert!(out.contains("Results unavailable: Network error."));
    }
}
