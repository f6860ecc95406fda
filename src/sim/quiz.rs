//! Multiple-choice quiz
//!
//! Question text is supplied by the host; this only tracks progress and score.

use serde::{Deserialize, Serialize};

use crate::error::{ArcadeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// Progress through a fixed list of questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
    index: usize,
    selected: Option<usize>,
    score: u32,
    complete: bool,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        // An empty quiz has nothing to answer
        let complete = questions.is_empty();
        Self {
            questions,
            index: 0,
            selected: None,
            score: 0,
            complete,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.complete {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    /// Zero-based index of the question being shown
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Select an option (may be changed until `next`)
    pub fn choose(&mut self, option: usize) -> Result<()> {
        let question = self.current().ok_or(ArcadeError::QuizComplete)?;
        let count = question.options.len();
        if option >= count {
            return Err(ArcadeError::OptionOutOfRange {
                index: option,
                count,
            });
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Lock in the selection; returns whether it was correct
    pub fn next(&mut self) -> Result<bool> {
        let question = self.current().ok_or(ArcadeError::QuizComplete)?;
        let selected = self.selected.ok_or(ArcadeError::NoSelection)?;

        let correct = selected == question.answer_index;
        if correct {
            self.score += 1;
        }

        if self.is_last() {
            self.complete = true;
            log::info!("Quiz complete: {} / {}", self.score, self.questions.len());
        } else {
            self.index += 1;
            self.selected = None;
        }
        Ok(correct)
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.selected = None;
        self.score = 0;
        self.complete = self.questions.is_empty();
    }
}
