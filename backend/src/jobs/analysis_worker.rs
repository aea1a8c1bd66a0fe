use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::llm_analysis::Analyst;
use crate::models::analysis_models::AnalysisJob;

#[derive(Debug, Error, PartialEq)]
#[error("analysis worker is not running")]
pub struct QueueClosed;

/// Sending half of the outbound analysis queue. Cloned into every handler.
#[derive(Clone, Debug)]
pub struct AnalysisQueue {
    sender: mpsc::UnboundedSender<AnalysisJob>,
}

impl AnalysisQueue {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AnalysisJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn enqueue(&self, job: AnalysisJob) -> Result<(), QueueClosed> {
        self.sender.send(job).map_err(|_| QueueClosed)
    }
}

/// Starts the worker on the current runtime. The worker stops once every
/// queue handle is dropped and resolves to the number of jobs it handled.
pub fn spawn_analysis_worker(analyst: Arc<dyn Analyst>) -> (AnalysisQueue, JoinHandle<usize>) {
    let (queue, receiver) = AnalysisQueue::channel();
    let handle = tokio::spawn(run_worker(receiver, analyst));
    (queue, handle)
}

pub async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<AnalysisJob>,
    analyst: Arc<dyn Analyst>,
) -> usize {
    let mut handled = 0;
    while let Some(job) = receiver.recv().await {
        let job_id = job.id;
        tracing::debug!(%job_id, question = %job.question, "Analyzing answer");
        match analyst.analyze(job).await {
            Ok(assessment) => {
                tracing::info!(%job_id, "Analysis complete: {}", assessment);
            }
            Err(e) => {
                tracing::error!(%job_id, "Failed to analyze answer: {}", e);
            }
        }
        handled += 1;
    }
    tracing::info!("Analysis worker stopped after {} jobs", handled);
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::llm_analysis::{AnalysisError, MockAnalyst};
    use crate::models::analysis_models::AnalyzeRequest;
    use mockall::Sequence;

    fn job(question: &str, answer: &str) -> AnalysisJob {
        AnalysisJob::new(AnalyzeRequest {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    #[tokio::test]
    async fn worker_hands_every_job_to_the_analyst_in_order() {
        let mut analyst = MockAnalyst::new();
        let mut seq = Sequence::new();
        analyst
            .expect_analyze()
            .withf(|job| job.question == "Q1" && job.answer == "A1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("ok".to_string()));
        analyst
            .expect_analyze()
            .withf(|job| job.question == "Q2" && job.answer == " A2 ")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("ok".to_string()));

        let (queue, handle) = spawn_analysis_worker(Arc::new(analyst));
        queue.enqueue(job("Q1", "A1")).unwrap();
        queue.enqueue(job("Q2", " A2 ")).unwrap();
        drop(queue);

        assert_eq!(handle.await.unwrap(), 2);
    }

    #[tokio::test]
    async fn failed_analysis_does_not_stop_the_worker() {
        let mut analyst = MockAnalyst::new();
        let mut seq = Sequence::new();
        analyst
            .expect_analyze()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AnalysisError::EmptyResponse));
        analyst
            .expect_analyze()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("ok".to_string()));

        let (queue, handle) = spawn_analysis_worker(Arc::new(analyst));
        queue.enqueue(job("Q1", "A1")).unwrap();
        queue.enqueue(job("Q2", "A2")).unwrap();
        drop(queue);

        assert_eq!(handle.await.unwrap(), 2);
    }

    #[tokio::test]
    async fn enqueue_fails_once_worker_is_gone() {
        let (queue, receiver) = AnalysisQueue::channel();
        drop(receiver);
        assert_eq!(queue.enqueue(job("Q1", "A1")), Err(QueueClosed));
    }
}
