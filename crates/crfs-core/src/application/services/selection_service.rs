//! Selection Service - the prompt sequence.
//!
//! Asks for the stack, then each feature in order. Any prompt failure ends
//! the sequence immediately; no later prompt is shown.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{Answer, DomainError, Feature, Selection, Stack},
    error::CrfsResult,
};

/// Label of the stack menu.
pub const STACK_PROMPT: &str = "Select Stack";

pub struct SelectionService {
    prompter: Box<dyn Prompter>,
}

impl SelectionService {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Present the stack menu and return the chosen stack.
    pub fn select_stack(&self) -> CrfsResult<Stack> {
        let items = Stack::labels();
        let index = self.prompter.select(STACK_PROMPT, &items)?;

        let stack = Stack::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::InvalidChoice {
                index,
                len: items.len(),
            })?;
        debug!(stack = %stack, "Stack selected");
        Ok(stack)
    }

    /// Present the yes/no menu for `feature`; `true` iff "Yes" was chosen.
    pub fn select_feature(&self, feature: Feature) -> CrfsResult<bool> {
        let index = self.prompter.select(feature.prompt(), &Answer::labels())?;
        let answer = Answer::from_index(index)?;
        debug!(feature = %feature, answer = %answer, "Feature answered");
        Ok(answer.is_yes())
    }

    /// Run the whole prompt sequence, failing fast.
    #[instrument(skip_all)]
    pub fn collect(&self) -> CrfsResult<Selection> {
        let mut selection = Selection::new(self.select_stack()?);
        for feature in Feature::ALL {
            let wanted = self.select_feature(feature)?;
            selection = selection.with_feature(feature, wanted);
        }
        Ok(selection)
    }
}
