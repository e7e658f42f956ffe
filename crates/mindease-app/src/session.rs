use thiserror::Error;

use mindease_core::error::CoreError;
use mindease_core::models::responses::ResponseSet;
use mindease_core::models::scale::ScaleKind;
use mindease_core::models::snapshot::AssessmentSnapshot;
use mindease_instruments::assessment::AssessmentResult;
use mindease_storage::KeyValueStore;
use mindease_storage::snapshot::SnapshotPersistence;

/// Where the user is in the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Phq9,
    Gad7,
    Result,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{kind} has {answered} of {total} items answered")]
    Incomplete {
        kind: ScaleKind,
        answered: usize,
        total: usize,
    },

    #[error("no saved assessment to restore")]
    NothingSaved,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// One user's pass through both questionnaires.
///
/// Holds the in-progress answers and navigation step, and saves a snapshot
/// on completion when the user has opted in.
pub struct AssessmentSession<S> {
    step: Step,
    phq9: ResponseSet,
    gad7: ResponseSet,
    allow_save: bool,
    last_saved: Option<AssessmentSnapshot>,
    persistence: SnapshotPersistence<S>,
}

impl<S: KeyValueStore> AssessmentSession<S> {
    /// Start at the intro with the stored preference and last snapshot loaded.
    pub fn new(store: S) -> Self {
        let persistence = SnapshotPersistence::new(store);
        let allow_save = persistence.read_allow_save();
        let last_saved = persistence.read();
        Self {
            step: Step::Intro,
            phq9: ResponseSet::new(ScaleKind::Phq9),
            gad7: ResponseSet::new(ScaleKind::Gad7),
            allow_save,
            last_saved,
            persistence,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn responses(&self, kind: ScaleKind) -> &ResponseSet {
        match kind {
            ScaleKind::Phq9 => &self.phq9,
            ScaleKind::Gad7 => &self.gad7,
        }
    }

    pub fn allow_save(&self) -> bool {
        self.allow_save
    }

    pub fn last_saved(&self) -> Option<&AssessmentSnapshot> {
        self.last_saved.as_ref()
    }

    pub fn answered_count(&self, kind: ScaleKind) -> usize {
        self.responses(kind).answered_count()
    }

    pub fn start(&mut self) {
        self.step = Step::Phq9;
    }

    /// Record an answer for item `index` (zero-based) of `kind`.
    pub fn answer(
        &mut self,
        kind: ScaleKind,
        index: usize,
        value: i32,
    ) -> Result<(), SessionError> {
        let responses = match kind {
            ScaleKind::Phq9 => &mut self.phq9,
            ScaleKind::Gad7 => &mut self.gad7,
        };
        responses.set(index, value)?;
        Ok(())
    }

    /// Move to the next step. Leaving a questionnaire requires every item
    /// answered; reaching the result saves a snapshot if opted in.
    pub fn advance(&mut self) -> Result<Step, SessionError> {
        let next = match self.step {
            Step::Intro => Step::Phq9,
            Step::Phq9 => {
                self.ensure_complete(ScaleKind::Phq9)?;
                Step::Gad7
            }
            Step::Gad7 => {
                self.ensure_complete(ScaleKind::Gad7)?;
                let result = self.result();
                tracing::info!(
                    phq_total = result.phq_total,
                    gad_total = result.gad_total,
                    triage = %result.triage.level,
                    "assessment completed"
                );
                if self.allow_save {
                    self.save_snapshot();
                }
                Step::Result
            }
            Step::Result => Step::Result,
        };
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Intro | Step::Phq9 => Step::Intro,
            Step::Gad7 => Step::Phq9,
            Step::Result => Step::Gad7,
        };
        self.step
    }

    /// Derived scores, verdict and tips for the current answers.
    pub fn result(&self) -> AssessmentResult {
        AssessmentResult::evaluate(&self.phq9, &self.gad7)
    }

    /// Persist the opt-in flag. Opting in on the result step saves at once.
    pub fn set_allow_save(&mut self, allow: bool) {
        self.allow_save = allow;
        self.persistence.write_allow_save(allow);
        if allow && self.step == Step::Result {
            self.save_snapshot();
        }
    }

    /// Save the current answers as the latest snapshot.
    ///
    /// The in-memory copy is kept even if the store rejects the write.
    pub fn save_snapshot(&mut self) -> &AssessmentSnapshot {
        let ts = jiff::Timestamp::now().as_millisecond();
        let snapshot = self.result().to_snapshot(ts, &self.phq9, &self.gad7);
        self.persistence.write(&snapshot);
        self.last_saved.insert(snapshot)
    }

    /// Load the saved answers back and jump to the result.
    pub fn restore_last_saved(&mut self) -> Result<(), SessionError> {
        let snapshot = self.last_saved.as_ref().ok_or(SessionError::NothingSaved)?;
        let phq9 = snapshot.phq9_responses()?;
        let gad7 = snapshot.gad7_responses()?;

        self.phq9 = phq9;
        self.gad7 = gad7;
        self.step = Step::Result;
        Ok(())
    }

    pub fn clear_last_saved(&mut self) {
        self.persistence.clear();
        self.last_saved = None;
    }

    /// Discard all answers and return to the intro. The saved snapshot and
    /// preference are kept.
    pub fn restart(&mut self) {
        self.phq9 = ResponseSet::new(ScaleKind::Phq9);
        self.gad7 = ResponseSet::new(ScaleKind::Gad7);
        self.step = Step::Intro;
    }

    fn ensure_complete(&self, kind: ScaleKind) -> Result<(), SessionError> {
        let responses = self.responses(kind);
        if responses.all_answered() {
            return Ok(());
        }
        Err(SessionError::Incomplete {
            kind,
            answered: responses.answered_count(),
            total: responses.len(),
        })
    }
}
