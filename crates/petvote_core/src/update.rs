use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::VoteClicked(option) => {
            if state.begin_submission(option) {
                vec![Effect::SubmitVote(option)]
            } else {
                // A submission is already in flight; ignore the click.
                Vec::new()
            }
        }
        Msg::VoteSucceeded(option) => {
            state.confirm_submission(option);
            // The confirmed vote changed the tally; refetch once.
            let request = state.begin_fetch();
            vec![Effect::FetchResults { request }]
        }
        Msg::VoteFailed(message) => {
            state.fail_submission(message);
            Vec::new()
        }
        Msg::VoteAgainClicked => {
            state.reset_submission();
            Vec::new()
        }
        Msg::RefreshClicked => {
            let request = state.begin_fetch();
            vec![Effect::FetchResults { request }]
        }
        Msg::ResultsLoaded { request, tally } => {
            state.apply_results(request, tally);
            Vec::new()
        }
        Msg::ResultsFailed { request, message } => {
            state.fail_results(request, message);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
