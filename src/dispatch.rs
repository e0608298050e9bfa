use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;

use crate::common::{AdvisorError, ERROR_PREFIX};
use crate::sink::SinkHandle;

/// One opaque request/response call to the remote model. Latency and
/// failure modes are unspecified; all failures collapse into one error path.
#[async_trait]
pub trait RemoteModel: Send + Sync {
    async fn call(&self, prompt: &str) -> Result<String, AdvisorError>;
}

// the model decides the answer language, we only instruct it
pub fn build_prompt(question: &str) -> String {
    format!(
        "Please answer the following ethics question. If the question is in \
        Hindi or contains Hindi words, respond in Hinglish (mix of Hindi and \
        English). If the question is in English, respond in English:\n\n{}",
        question)
}

/// Runs remote calls on worker tasks so the egui thread never blocks on
/// network I/O. One task is spawned per dispatch and terminates after
/// posting its result; there is no retry, timeout or cancellation.
pub struct Dispatcher {
    rt: Handle,
    model: Arc<dyn RemoteModel>,
}

impl Dispatcher {
    pub fn new(rt: Handle, model: Arc<dyn RemoteModel>) -> Self {
        Self { rt, model }
    }

    /// Spawns the remote call and returns immediately. Success and failure
    /// both end up as exactly one message on the sink; a failure message
    /// carries [`ERROR_PREFIX`]. Never panics past the worker boundary.
    pub fn dispatch(&self, query: &str, sink: SinkHandle, ctx: &egui::Context) {
        let prompt = build_prompt(query);
        let model = self.model.clone();
        let ctx = ctx.clone();

        self.rt.spawn(async move {
            let message = match model.call(&prompt).await {
                Ok(answer) => answer,
                Err(error) => {
                    log::error!("dispatch failed: {}", error);
                    format!("{}{}", ERROR_PREFIX, error)
                }
            };
            sink.post(message);
            // wake the egui thread so the drain happens promptly
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use tokio::runtime::Runtime;

    use super::*;
    use crate::sink::ResultSink;

    pub struct StubModel {
        pub reply: Result<String, String>,
    }

    #[async_trait]
    impl RemoteModel for StubModel {
        async fn call(&self, _prompt: &str) -> Result<String, AdvisorError> {
            self.reply.clone().map_err(AdvisorError::Remote)
        }
    }

    /// Never resolves; simulates a hung remote call.
    pub struct HangingModel;

    #[async_trait]
    impl RemoteModel for HangingModel {
        async fn call(&self, _prompt: &str) -> Result<String, AdvisorError> {
            std::future::pending().await
        }
    }

    fn drain_within(sink: &ResultSink, timeout: Duration) -> Option<String> {
        let deadline = std::time::Instant::now() + timeout;
        while std::time::Instant::now() < deadline {
            if let Some(message) = sink.drain_once() {
                return Some(message);
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn prompt_template_embeds_the_question() {
        let prompt = build_prompt("What is utilitarianism?");
        assert!(prompt.contains("What is utilitarianism?"));
        assert!(prompt.contains("Hinglish"));
    }

    #[test]
    fn successful_call_posts_the_answer() {
        let rt = Runtime::new().unwrap();
        let sink = ResultSink::new();
        let dispatcher = Dispatcher::new(rt.handle().clone(),
            Arc::new(StubModel { reply: Ok("Utilitarianism is...".into()) }));

        dispatcher.dispatch("What is utilitarianism?", sink.handle(),
            &egui::Context::default());

        let message = drain_within(&sink, Duration::from_secs(2))
            .expect("no message delivered");
        assert_eq!(message, "Utilitarianism is...");
    }

    #[test]
    fn failing_call_posts_exactly_one_error_message() {
        let rt = Runtime::new().unwrap();
        let sink = ResultSink::new();
        let dispatcher = Dispatcher::new(rt.handle().clone(),
            Arc::new(StubModel { reply: Err("quota exceeded".into()) }));

        dispatcher.dispatch("any question", sink.handle(),
            &egui::Context::default());

        let message = drain_within(&sink, Duration::from_secs(2))
            .expect("no message delivered");
        assert!(message.starts_with(ERROR_PREFIX), "got: {}", message);
        assert!(message.contains("quota exceeded"));
        assert_eq!(sink.drain_once(), None);
    }
}
