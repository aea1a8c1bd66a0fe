use gloo_net::http::Request;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::session::{Session, SubmitError, Submission};

/// Receives every accepted question/answer pair. Implementations must not
/// block; the questionnaire never waits for or inspects the outcome.
pub trait Analyzer {
    fn analyze(&self, question: &str, answer: &str);
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub question: String,
    pub answer: String,
}

/// Posts each pair to the backend's `/api/analyze` without awaiting it.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpAnalyzer {
    base_url: String,
}

impl HttpAnalyzer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, question: &str, answer: &str) {
        let url = self.endpoint();
        let body = AnalyzeRequest {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        spawn_local(async move {
            let request = match Request::post(&url).json(&body) {
                Ok(req) => req,
                Err(e) => {
                    warn!("Failed to build analysis request: {}", e);
                    return;
                }
            };
            match request.send().await {
                Ok(response) if response.ok() => debug!("Analysis queued"),
                Ok(response) => warn!("Analysis rejected with status {}", response.status()),
                Err(e) => warn!("Analysis request failed: {}", e),
            }
        });
    }
}

/// Submits the session's current answer and, on success, hands the pair to
/// `analyzer` exactly once.
pub fn submit_and_dispatch(
    session: &mut Session,
    analyzer: Option<&dyn Analyzer>,
) -> Result<Submission, SubmitError> {
    let submission = session.submit()?;
    if let Some(analyzer) = analyzer {
        analyzer.analyze(submission.question, &submission.answer);
    }
    Ok(submission)
}
