//! Prompter that answers from a prepared script.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crfs_core::{
    application::{ApplicationError, ports::Prompter},
    error::CrfsResult,
};

/// Answers each prompt with the next scripted item label.
///
/// Used for non-interactive runs (`new --stack ...`) and in tests. Clones
/// share the same queue and transcript.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(ScriptedInner {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            })),
        }
    }

    /// Labels of every prompt shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.lock().asked.clone()
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lock().answers.len()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptedInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, label: &str, items: &[&'static str]) -> CrfsResult<usize> {
        let mut inner = self.lock();
        inner.asked.push(label.to_string());

        let answer = inner
            .answers
            .pop_front()
            .ok_or_else(|| ApplicationError::Prompt {
                label: label.to_string(),
                reason: "no scripted answer left".into(),
            })?;

        let index = items
            .iter()
            .position(|item| *item == answer)
            .ok_or_else(|| ApplicationError::Prompt {
                label: label.to_string(),
                reason: format!("'{answer}' is not one of: {}", items.join(", ")),
            })?;

        debug!(label, answer = %answer, index, "Scripted answer");
        Ok(index)
    }
}
