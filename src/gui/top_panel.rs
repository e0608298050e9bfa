use egui::{Color32, RichText};

use crate::gui::{State, Tab};

pub fn ui_top_panel(ctx: &egui::Context, state: &mut State) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut state.active_tab, Tab::Chat, "Chat");
            ui.selectable_value(&mut state.active_tab, Tab::Instructions,
                "Instructions");

            ui.separator();

            if ui.button("Dark")
                .on_hover_text("Switch to the dark theme")
                .clicked()
            {
                ctx.set_theme(egui::Theme::Dark);
                state.app_theme = "dark".to_string();
            }

            if ui.button("Light")
                .on_hover_text("Switch to the light theme")
                .clicked()
            {
                ctx.set_theme(egui::Theme::Light);
                state.app_theme = "light".to_string();
            }

            ui.separator();

            if state.api_key_set {
                ui.label(RichText::new("🔑")
                    .color(Color32::from_rgb(0, 220, 0)).strong())
                    .on_hover_text("OpenRouter API key is set");
            } else {
                ui.colored_label(ui.visuals().error_fg_color, "🔑")
                    .on_hover_text("OpenRouter API key is missing");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                ui.label(RichText::new("AI Ethics Advisor")
                    .color(ui.visuals().hyperlink_color)
                    .strong());
            });
        });
    });
}
