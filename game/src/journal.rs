use serde::{Deserialize, Serialize};

use crate::collections::Sequence;

pub const JOURNAL_LIMIT: usize = 100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Presentation collaborator notified about every posted message.
pub trait MessageSink {
    fn receive(&mut self, text: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: usize,
    pub text: String,
    pub severity: Severity,
    /// World time in seconds.
    pub time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalDomain {
    pub messages: Vec<Message>,
    pub unread: usize,
    pub messages_id: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Journal {
    MessagePosted {
        id: usize,
        text: String,
        severity: Severity,
    },
    MessagesRead,
}

impl JournalDomain {
    /// Appends a message, dropping the oldest ones past the journal limit.
    pub fn post(&mut self, text: &str, severity: Severity, time: f64) -> Vec<Journal> {
        let id = self.messages_id.one(|id| id);
        self.messages.push(Message {
            id,
            text: text.to_string(),
            severity,
            time,
        });
        if self.messages.len() > JOURNAL_LIMIT {
            let excess = self.messages.len() - JOURNAL_LIMIT;
            self.messages.drain(..excess);
        }
        self.unread = (self.unread + 1).min(self.messages.len());
        vec![Journal::MessagePosted {
            id,
            text: text.to_string(),
            severity,
        }]
    }

    pub fn mark_read(&mut self) -> Vec<Journal> {
        self.unread = 0;
        vec![Journal::MessagesRead]
    }

    pub fn normalize(&mut self) {
        for message in &self.messages {
            self.messages_id.register(message.id);
        }
        self.unread = self.unread.min(self.messages.len());
    }
}
