use egui::{Key, RichText, TextEdit};

use crate::gui::{State, Tab};

pub fn ui_bottom_panel(ctx: &egui::Context, state: &mut State) {
    egui::TopBottomPanel::bottom("chat_input_panel").show(ctx, |ui| {
        if state.active_tab == Tab::Chat {
            render_input_row(ui, ctx, state);
        }
        render_status_row(ui, state);
    });
}

fn render_input_row(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut State) {
    // the whole input surface is disabled while a request is outstanding;
    // draining the response is what re-enables it
    let pending = state.coordinator.is_pending();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let send_clicked = ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let send_clicked = ui.add_enabled(!pending,
                egui::Button::new("Send ➤")).clicked();

            let response = ui.add_enabled(!pending,
                TextEdit::singleline(&mut state.question_entered)
                    .desired_width(ui.available_width())
                    .hint_text("Type your ethics question here"));

            let enter_pressed = response.lost_focus()
                && ui.input(|i| i.key_pressed(Key::Enter));
            if enter_pressed {
                // keep the focus so the user can type the next question
                response.request_focus();
            }

            send_clicked || enter_pressed
        }).inner;

        if send_clicked && !pending {
            state.send_question(ctx);
        }
    });
    ui.add_space(4.0);
}

fn render_status_row(ui: &mut egui::Ui, state: &State) {
    ui.horizontal(|ui| {
        if state.coordinator.is_pending() {
            ui.label("Getting response…");
        } else {
            ui.label("Ready");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
            ui.label(RichText::new(
                format!("Developed by: {}", state.config.owner))
                .weak());
        });
    });
}
