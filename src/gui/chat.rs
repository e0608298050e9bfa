use egui::{Margin, RichText, Stroke};
use egui_commonmark::CommonMarkViewer;

use crate::common::{ChatEntry, EntryKind};
use crate::gui::State;

pub fn ui_chat(ctx: &egui::Context, state: &mut State) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .id_salt("chat_scroll_main")
        // Preventing auto-shrink ensures the scroll area tries to fill the
        // parent, helping capture input.
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_transcript(ui, state);
        });
    });
}

fn render_transcript(ui: &mut egui::Ui, state: &mut State) {
    // welcome screen is only shown when the transcript is empty:
    if state.transcript.is_empty() {
        egui::Frame::default()
        .stroke(Stroke {
            width: 1.0,
            color: ui.visuals().hyperlink_color,
        })
        .outer_margin(Margin {
            top: 0,
            right: 5,
            bottom: 0,
            left: 5,
        })
        .inner_margin(10.0)
        .corner_radius(5.0)
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.heading("Welcome to AI Ethics Advisor!");
            ui.label("Ask me any question about ethics in Hindi or English.");
        });
        return;
    }

    let cache = &mut state.common_mark_cache;
    for entry in &state.transcript {
        render_entry(ui, cache, entry);
        ui.add_space(10.0);
    }
}

fn render_entry(
    ui: &mut egui::Ui,
    cache: &mut egui_commonmark::CommonMarkCache,
    entry: &ChatEntry,
) {
    match entry.kind {
        EntryKind::User => {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("You:")
                    .color(ui.visuals().hyperlink_color).strong());
                ui.label(&entry.content);
            });
        }
        EntryKind::Assistant => {
            egui::Frame::default()
            .stroke(Stroke {
                width: 1.0,
                color: ui.visuals().weak_text_color(),
            })
            .inner_margin(8.0)
            .corner_radius(5.0)
            .fill(ui.visuals().faint_bg_color)
            .show(ui, |ui| {
                ui.label(RichText::new("AI:")
                    .color(ui.visuals().strong_text_color()).strong());
                CommonMarkViewer::new().show(ui, cache, &entry.content);
                ui.allocate_space(egui::vec2(ui.available_width(), 0.0));
            });
        }
        EntryKind::Error => {
            ui.colored_label(ui.visuals().error_fg_color,
                RichText::new(&entry.content).strong());
        }
    }
}
