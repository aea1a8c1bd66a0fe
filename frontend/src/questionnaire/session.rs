use thiserror::Error;

use super::questions::QuestionSet;

/// Where the walkthrough currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Question `i` is still being typed out.
    Revealing(usize),
    /// Question `i` is fully shown and the input is open.
    AwaitingInput(usize),
    Completed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("question {0} is still being revealed")]
    NotReady(usize),
    #[error("questionnaire already completed")]
    Completed,
}

/// One accepted answer, paired with the question it answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub index: usize,
    pub question: &'static str,
    pub answer: String,
}

/// In-memory state of one questionnaire walkthrough.
///
/// `answers.len()` always equals `current_index`, and `answers[i]` is the
/// answer to question `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    questions: QuestionSet,
    current_index: usize,
    answers: Vec<String>,
    current_answer: String,
    typing_complete: bool,
}

impl Session {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            answers: Vec::with_capacity(questions.len()),
            current_answer: String::new(),
            typing_complete: false,
        }
    }

    pub fn questions(&self) -> QuestionSet {
        self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn current_answer(&self) -> &str {
        &self.current_answer
    }

    pub fn is_typing_complete(&self) -> bool {
        self.typing_complete
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn phase(&self) -> Phase {
        if self.is_completed() {
            Phase::Completed
        } else if self.typing_complete {
            Phase::AwaitingInput(self.current_index)
        } else {
            Phase::Revealing(self.current_index)
        }
    }

    /// Question text currently on screen, if any.
    pub fn current_question(&self) -> Option<&'static str> {
        self.questions.get(self.current_index)
    }

    /// Questions already answered, with their answers, in interview order.
    pub fn transcript(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.questions
            .iter()
            .zip(self.answers.iter().map(String::as_str))
    }

    /// Records the reveal-complete signal for question `index`.
    ///
    /// Returns true if the gate opened. Signals for a question other than the
    /// current one are stale and ignored.
    pub fn reveal_complete(&mut self, index: usize) -> bool {
        if self.is_completed() || index != self.current_index || self.typing_complete {
            return false;
        }
        self.typing_complete = true;
        true
    }

    /// Replaces the scratch buffer. Ignored once completed.
    pub fn set_current_answer(&mut self, text: impl Into<String>) {
        if self.is_completed() {
            return;
        }
        self.current_answer = text.into();
    }

    /// Accepts the scratch buffer as the answer to the current question and
    /// advances. The answer is kept exactly as typed; only the emptiness
    /// check looks at the trimmed text.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        let question = match self.phase() {
            Phase::Completed => return Err(SubmitError::Completed),
            Phase::Revealing(index) => return Err(SubmitError::NotReady(index)),
            Phase::AwaitingInput(index) => self
                .questions
                .get(index)
                .ok_or(SubmitError::Completed)?,
        };
        if self.current_answer.trim().is_empty() {
            return Err(SubmitError::EmptyAnswer);
        }

        let answer = std::mem::take(&mut self.current_answer);
        let index = self.current_index;
        self.answers.push(answer.clone());
        self.current_index += 1;
        self.typing_complete = false;

        Ok(Submission { index, question, answer })
    }

    /// Key that changes whenever the transcript should be re-scrolled.
    pub fn sync_key(&self) -> (usize, bool) {
        (self.current_index, self.typing_complete)
    }
}
