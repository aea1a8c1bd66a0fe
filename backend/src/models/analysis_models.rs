use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub question: String,
    pub answer: String,
}

/// One question/answer pair waiting for the analysis worker.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisJob {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

impl AnalysisJob {
    pub fn new(request: AnalyzeRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: request.question,
            answer: request.answer,
        }
    }
}
