use crate::view_model::{build_view_model, AppViewModel};

/// Sequence number tagging a results fetch. Responses carrying an older
/// number than the latest issued one are stale and must be discarded.
pub type FetchRequest = u64;

/// One of the two fixed vote categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOption {
    Cats,
    Dogs,
}

impl VoteOption {
    /// Both options, in display order.
    pub const ALL: [VoteOption; 2] = [VoteOption::Cats, VoteOption::Dogs];

    pub fn label(self) -> &'static str {
        match self {
            VoteOption::Cats => "Cats",
            VoteOption::Dogs => "Dogs",
        }
    }
}

/// Snapshot of server-side vote counts. Replaced wholesale on each
/// successful fetch, never partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub cats: u64,
    pub dogs: u64,
}

impl Tally {
    /// The total is always recomputed from the per-option counts.
    pub fn total(self) -> u64 {
        self.cats + self.dogs
    }

    pub fn count(self, option: VoteOption) -> u64 {
        match option {
            VoteOption::Cats => self.cats,
            VoteOption::Dogs => self.dogs,
        }
    }
}

/// Lifecycle of a single vote submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(VoteOption),
    Succeeded(VoteOption),
    Failed(String),
}

/// Lifecycle of the results fetch. There is no cached tally while a fetch
/// is in flight; `Loading` suppresses previously loaded data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsState {
    #[default]
    Loading,
    Loaded(Tally),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    submission: SubmissionState,
    results: ResultsState,
    latest_fetch: FetchRequest,
    dirty: bool,
}

impl AppState {
    /// Fresh state plus the effects that must run immediately: results
    /// start in `Loading` with the first fetch already issued.
    pub fn init() -> (Self, Vec<crate::Effect>) {
        let mut state = Self::default();
        let request = state.begin_fetch();
        (state, vec![crate::Effect::FetchResults { request }])
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn view(&self) -> AppViewModel {
        build_view_model(&self.results, &self.submission)
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Moves to `Submitting` unless a submission is already in flight.
    pub(crate) fn begin_submission(&mut self, option: VoteOption) -> bool {
        if matches!(self.submission, SubmissionState::Submitting(_)) {
            return false;
        }
        self.submission = SubmissionState::Submitting(option);
        self.dirty = true;
        true
    }

    pub(crate) fn confirm_submission(&mut self, option: VoteOption) {
        self.submission = SubmissionState::Succeeded(option);
        self.dirty = true;
    }

    pub(crate) fn fail_submission(&mut self, message: String) {
        self.submission = SubmissionState::Failed(message);
        self.dirty = true;
    }

    pub(crate) fn reset_submission(&mut self) {
        self.submission = SubmissionState::Idle;
        self.dirty = true;
    }

    /// Discards any cached tally, issues the next fetch sequence number
    /// and enters `Loading`.
    pub(crate) fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_fetch += 1;
        self.results = ResultsState::Loading;
        self.dirty = true;
        self.latest_fetch
    }

    /// Applies a fetch result unless it is stale. Returns whether the
    /// response was accepted.
    pub(crate) fn apply_results(&mut self, request: FetchRequest, tally: Tally) -> bool {
        if request != self.latest_fetch {
            return false;
        }
        self.results = ResultsState::Loaded(tally);
        self.dirty = true;
        true
    }

    pub(crate) fn fail_results(&mut self, request: FetchRequest, message: String) -> bool {
        if request != self.latest_fetch {
            return false;
        }
        self.results = ResultsState::Failed(message);
        self.dirty = true;
        true
    }
}
