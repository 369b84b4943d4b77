//! Tracking sessions and the in-memory session store.
//!
//! A `TrackingSession` owns everything one user builds up while tracking:
//! biometrics, goals, the intake ledger and the progress history. The core
//! keeps no global state; sessions live in a `SessionStore` for as long as
//! the front end needs them and are discarded afterwards.

use crate::goals::evaluate;
use crate::history::ProgressHistory;
use crate::ledger::IntakeLedger;
use crate::suggestion::{suggest, ExerciseRate, Suggestion};
use crate::{
    BmiCategory, Biometrics, Error, Goals, IntakeEntry, MacroTotals, ProgressRecord,
    RemainingBudget, Result,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A computed BMI with its category
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
}

/// Result of one evaluation pass over a session
///
/// The BMI is computed independently of the intake pipeline: when the
/// biometrics cannot produce one, `bmi` is `None` and `bmi_error` says
/// why, while totals, budgets and suggestions are still filled in.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    pub bmi: Option<BmiReading>,
    pub bmi_error: Option<String>,
    pub totals: MacroTotals,
    pub budgets: Vec<RemainingBudget>,
    pub suggestions: Vec<Suggestion>,
}

/// State for a single tracking session
#[derive(Clone, Debug)]
pub struct TrackingSession {
    biometrics: Biometrics,
    goals: Goals,
    ledger: IntakeLedger,
    history: ProgressHistory,
}

impl TrackingSession {
    pub fn new(biometrics: Biometrics, goals: Goals) -> Self {
        Self {
            biometrics,
            goals,
            ledger: IntakeLedger::new(),
            history: ProgressHistory::new(),
        }
    }

    pub fn biometrics(&self) -> &Biometrics {
        &self.biometrics
    }

    pub fn set_biometrics(&mut self, biometrics: Biometrics) {
        self.biometrics = biometrics;
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Goals may change at any point, before or after intake is logged
    pub fn set_goals(&mut self, goals: Goals) {
        tracing::debug!("Goals updated: {:?}", goals);
        self.goals = goals;
    }

    pub fn ledger(&self) -> &IntakeLedger {
        &self.ledger
    }

    pub fn history(&self) -> &ProgressHistory {
        &self.history
    }

    pub fn log_intake(&mut self, entry: IntakeEntry) {
        self.ledger.append(entry);
    }

    /// Compute BMI, totals, budgets and suggestions without touching history
    pub fn evaluate(&self, rate: &ExerciseRate) -> Evaluation {
        let (bmi, bmi_error) = match self.biometrics.classify() {
            Ok((value, category)) => (Some(BmiReading { value, category }), None),
            Err(e) => {
                tracing::debug!("BMI unavailable: {}", e);
                (None, Some(e.to_string()))
            }
        };
        let totals = self.ledger.totals();
        let budgets = evaluate(&self.goals, &totals);
        let suggestions = suggest(&budgets, rate);

        tracing::debug!(
            "Evaluated session: {} entries, {} suggestions",
            self.ledger.len(),
            suggestions.len()
        );

        Evaluation {
            bmi,
            bmi_error,
            totals,
            budgets,
            suggestions,
        }
    }

    /// Append today's calorie total and goal to the history
    ///
    /// This is the only path that grows the history.
    pub fn record_progress(&mut self) -> &ProgressRecord {
        let totals = self.ledger.totals();
        self.history.record(totals.calories, self.goals.calories)
    }
}

/// Opaque handle to a stored session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Session-lifetime storage for tracking sessions
///
/// Mutation requires `&mut self`, so a given session has at most one
/// writer at a time.
pub trait SessionStore {
    fn create(&mut self, session: TrackingSession) -> SessionId;
    fn get(&self, id: SessionId) -> Option<&TrackingSession>;
    fn get_mut(&mut self, id: SessionId) -> Option<&mut TrackingSession>;
    fn discard(&mut self, id: SessionId) -> Option<TrackingSession>;

    /// Like `get_mut`, but a missing session is an error
    fn require_mut(&mut self, id: SessionId) -> Result<&mut TrackingSession> {
        self.get_mut(id)
            .ok_or_else(|| Error::Session(format!("no session with id {}", id)))
    }
}

/// HashMap-backed store; nothing outlives the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<SessionId, TrackingSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&mut self, session: TrackingSession) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, session);
        tracing::debug!("Created session {}", id);
        id
    }

    fn get(&self, id: SessionId) -> Option<&TrackingSession> {
        self.sessions.get(&id)
    }

    fn get_mut(&mut self, id: SessionId) -> Option<&mut TrackingSession> {
        self.sessions.get_mut(&id)
    }

    fn discard(&mut self, id: SessionId) -> Option<TrackingSession> {
        let removed = self.sessions.remove(&id);
        if removed.is_some() {
            tracing::debug!("Discarded session {}", id);
        }
        removed
    }
}
