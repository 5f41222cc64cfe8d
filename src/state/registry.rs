//! Conversation registry and step sequencer
//!
//! The registry is the sole container of in-progress conversations. It maps a
//! user id to that user's answers and position in the question spec, and it is
//! the only code allowed to mutate that state. All operations go through one
//! interior lock, so two messages from the same user cannot race on the same
//! field or double-trigger completion, and completion plus cleanup happen in
//! a single critical section.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::models::order::OrderRecord;
use crate::state::questionnaire::QuestionSpec;
use crate::utils::errors::{OrderDeskError, Result};

/// One user's in-progress run through the questionnaire
#[derive(Debug, Clone)]
pub struct ConversationState {
    /// User id this conversation belongs to
    pub user_id: i64,
    /// Index of the question currently awaiting an answer
    pub current: usize,
    /// Answers collected so far, keyed by question field
    pub answers: HashMap<String, String>,
    /// When this conversation was started
    pub started_at: DateTime<Utc>,
    /// When this conversation last advanced
    pub updated_at: DateTime<Utc>,
}

impl ConversationState {
    fn new(user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            current: 0,
            answers: HashMap::new(),
            started_at: now,
            updated_at: now,
        }
    }
}

/// Result of feeding one message into the sequencer
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// More questions remain; send this prompt next
    Prompt(String),
    /// The final answer arrived; the record is built and the conversation
    /// has been removed from the registry
    Complete(OrderRecord),
}

/// Process-wide registry of active conversations
#[derive(Debug)]
pub struct ConversationRegistry {
    questions: QuestionSpec,
    sessions: Mutex<HashMap<i64, ConversationState>>,
}

impl ConversationRegistry {
    /// Create a registry over a fixed question spec
    pub fn new(questions: QuestionSpec) -> Self {
        Self {
            questions,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The question spec this registry sequences
    pub fn questions(&self) -> &QuestionSpec {
        &self.questions
    }

    /// Start (or restart) the questionnaire for a user.
    ///
    /// Any prior in-progress conversation for the same user is discarded
    /// silently; restarting is a valid user action, not an error. Returns the
    /// prompt for the first question.
    pub fn begin(&self, user_id: i64) -> String {
        let mut sessions = self.lock_sessions();

        if sessions.insert(user_id, ConversationState::new(user_id)).is_some() {
            debug!(user_id = user_id, "Discarded in-progress conversation on restart");
        }
        info!(user_id = user_id, "Conversation started");

        // The spec constructor guarantees at least one question
        self.questions
            .get(0)
            .map(|q| q.prompt.clone())
            .unwrap_or_default()
    }

    /// Consume one message as the answer to the user's current question.
    ///
    /// The text is stored verbatim; blank answers are accepted. Returns the
    /// next prompt, or the built [`OrderRecord`] once the final question is
    /// answered. On completion the conversation is removed before this method
    /// returns, so callers never observe a completed-but-present state.
    pub fn advance(&self, user_id: i64, text: &str) -> Result<StepOutcome> {
        let mut sessions = self.lock_sessions();

        let state = sessions
            .get_mut(&user_id)
            .ok_or(OrderDeskError::NoActiveConversation { user_id })?;

        let question = self.questions.get(state.current).ok_or_else(|| {
            // Unreachable while the completion branch below removes entries
            OrderDeskError::NoActiveConversation { user_id }
        })?;

        state.answers.insert(question.field.clone(), text.to_string());
        state.current += 1;
        state.updated_at = Utc::now();

        debug!(
            user_id = user_id,
            field = %question.field,
            step = state.current,
            total = self.questions.len(),
            "Answer recorded"
        );

        if state.current < self.questions.len() {
            let next = self
                .questions
                .get(state.current)
                .map(|q| q.prompt.clone())
                .unwrap_or_default();
            return Ok(StepOutcome::Prompt(next));
        }

        // Final answer: build the record and drop the conversation while the
        // lock is still held, so completion and cleanup are atomic.
        let state = sessions.remove(&user_id).ok_or(OrderDeskError::NoActiveConversation {
            user_id,
        })?;
        let record = OrderRecord::build(&state.answers, &self.questions);

        info!(
            user_id = user_id,
            order_id = %record.order_id,
            "Conversation completed"
        );

        Ok(StepOutcome::Complete(record))
    }

    /// Cancel a user's conversation if one exists.
    ///
    /// Returns whether a conversation was actually removed; never fails.
    pub fn cancel(&self, user_id: i64) -> bool {
        let removed = self.lock_sessions().remove(&user_id).is_some();
        if removed {
            info!(user_id = user_id, "Conversation cancelled");
        }
        removed
    }

    /// Check whether a user has an active conversation
    pub fn is_active(&self, user_id: i64) -> bool {
        self.lock_sessions().contains_key(&user_id)
    }

    /// Number of active conversations
    pub fn active_count(&self) -> usize {
        self.lock_sessions().len()
    }

    /// Snapshot a user's state, for inspection and tests
    pub fn snapshot(&self, user_id: i64) -> Option<ConversationState> {
        self.lock_sessions().get(&user_id).cloned()
    }

    fn lock_sessions(&self) -> std::sync::MutexGuard<'_, HashMap<i64, ConversationState>> {
        // A poisoned lock only means another handler panicked mid-update for
        // its own user; the map itself stays usable.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
