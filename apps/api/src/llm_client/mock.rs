//! Scripted `CompletionModel` backends for handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionModel, LlmError};

/// One recorded `complete` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Replies with the same fixed text to every call, trimmed like the real client.
pub struct FixedCompletion {
    reply: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FixedCompletion {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for FixedCompletion {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
            temperature,
        });
        Ok(self.reply.trim().to_string())
    }
}

/// Fails every call with an upstream API error.
pub struct FailingCompletion {
    pub status: u16,
    pub message: String,
}

#[async_trait]
impl CompletionModel for FailingCompletion {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _temperature: f32,
    ) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: self.status,
            message: self.message.clone(),
        })
    }
}
