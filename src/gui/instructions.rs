use egui::RichText;

use crate::gui::State;

pub fn ui_instructions(ctx: &egui::Context, state: &mut State) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
        .id_salt("instructions_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(RichText::new("How to Use This App")
                .color(ui.visuals().hyperlink_color));
            ui.add_space(10.0);

            ui.label("Welcome to the AI Ethics Advisor!");
            ui.label("This application helps you learn ethics with \
                responses in Hinglish or English.");
            ui.add_space(10.0);

            ui.label(RichText::new("How to use:").strong());
            ui.label("1. Type your question about ethics and press Enter \
                or click Send.\n   \
                Example: \"Data privacy ke baare mein batao\" or \
                \"Explain utilitarianism\"");
            ui.label("2. The AI will respond with helpful information \
                tailored to your query.");
            ui.label("3. For better answers, try asking specific questions.\n   \
                Example: \"What is the difference between deontology \
                and consequentialism?\"");
            ui.label("4. You can ask for examples, case studies, or \
                explanations.");
            ui.add_space(10.0);

            ui.label(RichText::new("Tips:").strong());
            ui.label("- Ask about any ethics topic, Western or Indian.");
            ui.label("- Request examples to understand concepts better.");
            ui.label("- Questions in Hindi get answers in Hinglish.");
            ui.add_space(10.0);

            ui.label("This application uses a remote language model via \
                OpenRouter to provide responses. Happy learning!");
            ui.add_space(10.0);

            ui.label(RichText::new(
                format!("Developed by: {}", state.config.owner)).weak());
        });
    });
}
