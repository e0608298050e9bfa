use std::sync::Arc;

use tokio::runtime::Handle;

use crate::common::{ApiKey, AdvisorError, ERROR_PREFIX};
use crate::config::AdvisorConfig;
use crate::dispatch::{Dispatcher, RemoteModel};
use crate::gate::{Action, Gate};
use crate::sink::ResultSink;

/// Ties the gate, the dispatcher and the sink together and owns the single
/// "request outstanding" latch. At most one dispatch is in flight at a time;
/// while one is, further dispatches are refused and the caller keeps the
/// input surface disabled until [`Coordinator::drain_once`] delivers the
/// response.
pub struct Coordinator {
    gate: Gate,
    dispatcher: Dispatcher,
    sink: ResultSink,
    api_key: ApiKey,
    pending: bool,
}

impl Coordinator {
    pub fn new(
        rt: Handle,
        config: AdvisorConfig,
        model: Arc<dyn RemoteModel>,
        api_key: ApiKey,
    ) -> Self {
        Self {
            gate: Gate::new(config),
            dispatcher: Dispatcher::new(rt, model),
            sink: ResultSink::new(),
            api_key,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Routes one submitted query. `EmitLocal` answers are returned to the
    /// caller for immediate display and never touch the latch; a `Dispatch`
    /// sets the latch and starts the worker task. The caller echoes the raw
    /// query into the transcript before calling this.
    pub fn submit(&mut self, raw: &str, ctx: &egui::Context) -> Action {
        match self.gate.submit(raw) {
            Action::Dispatch(query) => {
                if self.pending {
                    // the UI disables input while pending, so this only
                    // happens if a caller ignores that contract
                    log::warn!("dispatch refused, a request is outstanding");
                    return Action::Ignore;
                }
                if !self.api_key.is_set {
                    return Action::EmitLocal(format!("{}{}",
                        ERROR_PREFIX, AdvisorError::MissingCredential));
                }
                self.pending = true;
                self.dispatcher.dispatch(&query, self.sink.handle(), ctx);
                Action::Dispatch(query)
            }
            action => action,
        }
    }

    /// One non-blocking poll of the hand-off queue, called from the egui
    /// thread on every frame. Delivering a message clears the latch; this
    /// is the sole trigger that re-enables input.
    pub fn drain_once(&mut self) -> Option<String> {
        let message = self.sink.drain_once()?;
        self.pending = false;
        Some(message)
    }
}
