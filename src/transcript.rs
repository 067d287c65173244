//! Framework-free chat state: what the message list contains and how a single
//! question moves from composed to answered.
//!
//! A send is split in two halves so the UI can render optimistically:
//! [`Transcript::begin`] appends the user bubble plus a typing placeholder, and
//! [`Transcript::resolve`] swaps that placeholder for exactly one terminal entry.
//! Placeholders carry the id of the request that owns them, so overlapping
//! requests each remove their own.

use crate::api::{AnswerClient, ChatResult};
use crate::format::{answer_time, clock_now};
use crate::types::{BotAnswer, ChatMessage, FaqItem, Sender};

pub const WELCOME_TITLE: &str = "Welcome to DCTM Enquiry Assistant";
pub const WELCOME_SUBTITLE: &str =
    "Ask about admissions, courses, fees, campus and placements. Try these:";
pub const WELCOME_PROMPTS: [&str; 4] = [
    "What are the UG fees?",
    "How to apply for MCA?",
    "Tell me about placements",
    "Hostel facilities details",
];

pub const NO_ANSWER_TEXT: &str = "Sorry, I do not have an answer for that.";
pub const NETWORK_FAILURE_TEXT: &str =
    "Sorry, something went wrong. Check your network or try again.";
pub const ERROR_PREFIX: &str = "Error: ";
pub const ANSWER_TIME_LABEL: &str = "Answer time: ";
pub const QUICK_FAQ_LIMIT: usize = 8;

pub type RequestId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerView {
    pub text: String,
    pub suggestions: Vec<String>,
    pub caption: Option<String>,
}

impl AnswerView {
    pub fn from_answer(answer: &BotAnswer) -> Self {
        let text = answer
            .answer
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_ANSWER_TEXT)
            .to_string();
        let suggestions = answer
            .suggestions
            .iter()
            .map(|s| s.question.clone())
            .collect();
        let caption = answer
            .timestamp
            .as_deref()
            .filter(|ts| !ts.is_empty())
            .map(|ts| format!("{ANSWER_TIME_LABEL}{}", answer_time(ts)));
        Self {
            text,
            suggestions,
            caption,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Welcome,
    Message(ChatMessage),
    Answer(AnswerView),
    Typing(RequestId),
}

/// How a request ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Answered(BotAnswer),
    /// The backend answered with an `error` field.
    Rejected(String),
    /// Transport or decode failure.
    Failed,
}

impl Outcome {
    pub fn from_result(result: ChatResult<BotAnswer>) -> Self {
        match result {
            Ok(mut answer) => match answer.error.take() {
                Some(error) if !error.is_empty() => Outcome::Rejected(error),
                _ => Outcome::Answered(answer),
            },
            Err(err) => {
                tracing::warn!("chat request failed: {err}");
                Outcome::Failed
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pending {
    pub id: RequestId,
    pub question: String,
}

/// Stable identity of an entry, used as the render key.
pub type EntryKey = u64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<Entry>,
    keys: Vec<EntryKey>,
    next_key: EntryKey,
    next_id: RequestId,
}

impl Transcript {
    pub fn with_welcome() -> Self {
        let mut transcript = Self::default();
        transcript.push(Entry::Welcome);
        transcript
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries paired with a key that survives removals elsewhere in the list.
    pub fn keyed_entries(&self) -> impl Iterator<Item = (EntryKey, &Entry)> {
        self.keys.iter().copied().zip(self.entries.iter())
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Entry::Typing(_)))
            .count()
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.keys.push(self.next_key);
        self.next_key += 1;
    }

    /// Optimistically renders `question`. Blank input is a no-op and returns `None`.
    pub fn begin(&mut self, question: &str) -> Option<Pending> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.push(Entry::Message(ChatMessage {
            text: question.to_string(),
            sender: Sender::User,
            timestamp: clock_now(),
        }));
        self.push(Entry::Typing(id));
        Some(Pending {
            id,
            question: question.to_string(),
        })
    }

    pub fn resolve(&mut self, id: RequestId, outcome: Outcome) {
        let placeholder = self
            .entries
            .iter()
            .position(|entry| matches!(entry, Entry::Typing(owner) if *owner == id));
        if let Some(index) = placeholder {
            self.entries.remove(index);
            self.keys.remove(index);
        }
        let terminal = match outcome {
            Outcome::Answered(answer) => Entry::Answer(AnswerView::from_answer(&answer)),
            Outcome::Rejected(error) => Entry::Message(bot_message(format!("{ERROR_PREFIX}{error}"))),
            Outcome::Failed => Entry::Message(bot_message(NETWORK_FAILURE_TEXT.to_string())),
        };
        self.push(terminal);
    }
}

fn bot_message(text: String) -> ChatMessage {
    ChatMessage {
        text,
        sender: Sender::Bot,
        timestamp: clock_now(),
    }
}

/// Issues the single request for `question` and classifies the result.
pub async fn exchange(client: &dyn AnswerClient, question: &str) -> Outcome {
    Outcome::from_result(client.ask(question).await)
}

pub fn quick_faq_prompts(items: Vec<FaqItem>) -> Vec<String> {
    items
        .into_iter()
        .take(QUICK_FAQ_LIMIT)
        .map(|item| item.question)
        .collect()
}
