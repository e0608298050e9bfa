use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self};
use egui_commonmark::CommonMarkCache;
use tokio::runtime::Handle;

use crate::common::{AdvisorError, ChatEntry, ERROR_PREFIX, EntryKind};
use crate::config::{AdvisorConfig, load_api_key};
use crate::coordinator::Coordinator;
use crate::gate::Action;
use crate::gui::bottom_panel::ui_bottom_panel;
use crate::gui::chat::ui_chat;
use crate::gui::instructions::ui_instructions;
use crate::gui::top_panel::ui_top_panel;
use crate::openr::OpenRouterModel;

mod top_panel;
mod bottom_panel;
mod chat;
mod instructions;

// how often the egui thread polls the hand-off queue while a request is out
const DRAIN_INTERVAL: Duration = Duration::from_millis(100);

// settings that survive a restart via eframe storage
#[derive(Default, Clone, serde::Deserialize, serde::Serialize)]
pub struct UiPrefs {
    pub theme: String,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Chat,
    Instructions,
}

pub struct State {
    pub config: AdvisorConfig,
    pub coordinator: Coordinator,
    pub transcript: Vec<ChatEntry>,
    pub question_entered: String,
    pub active_tab: Tab,
    pub api_key_set: bool,
    pub app_theme: String,
    pub common_mark_cache: CommonMarkCache,
}

impl State {
    pub fn new(rt: Handle, model_override: Option<String>,
            app_theme: String) -> Self {
        let config = AdvisorConfig::with_model(model_override);
        let api_key = load_api_key();
        let api_key_set = api_key.is_set;

        let model = Arc::new(OpenRouterModel::new(
            api_key.clone(), config.model.clone()));

        let mut transcript = Vec::new();
        if !api_key_set {
            // surfaced once, through the same channel as any other failure
            transcript.push(ChatEntry {
                kind: EntryKind::Error,
                content: format!("{}{}",
                    ERROR_PREFIX, AdvisorError::MissingCredential),
            });
        }

        Self {
            coordinator: Coordinator::new(rt, config.clone(), model, api_key),
            config,
            transcript,
            question_entered: String::new(),
            active_tab: Tab::Chat,
            api_key_set,
            app_theme,
            common_mark_cache: CommonMarkCache::default(),
        }
    }

    /// One conversation turn: echo the raw question, then act on what the
    /// gate decided. Called by the bottom panel when Send is pressed.
    pub fn send_question(&mut self, ctx: &egui::Context) {
        let question = std::mem::take(&mut self.question_entered);
        if question.trim().is_empty() {
            return;
        }

        self.transcript.push(ChatEntry::user(question.trim()));

        match self.coordinator.submit(&question, ctx) {
            Action::EmitLocal(answer) => {
                self.transcript.push(ChatEntry::from_response(answer));
            }
            Action::Dispatch(_) | Action::Ignore => {
                // a Dispatch answer arrives later via the sink; input stays
                // disabled until then
            }
        }
    }
}

pub struct App {
    state: State,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, rt: Handle,
            model_override: Option<String>, app_theme: String) -> Self {
        Self {
            state: State::new(rt, model_override, app_theme),
        }
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "ui_prefs", &UiPrefs {
            theme: self.state.app_theme.clone(),
        });
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        // drain on tick: at most one message per frame, never blocking
        if let Some(message) = state.coordinator.drain_once() {
            state.transcript.push(ChatEntry::from_response(message));
        }
        if state.coordinator.is_pending() {
            ctx.request_repaint_after(DRAIN_INTERVAL);
        }

        ui_top_panel(ctx, state);
        ui_bottom_panel(ctx, state);

        match state.active_tab {
            Tab::Chat => ui_chat(ctx, state),
            Tab::Instructions => ui_instructions(ctx, state),
        }
    }
}
