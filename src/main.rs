#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use egui::ViewportBuilder;
use tokio::runtime::Runtime;

mod common;
mod config;
mod coordinator;
mod dispatch;
mod gate;
mod gui;
mod openr;
mod sink;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long)]
    // Set the application theme (e.g., "light", "dark")
    theme: Option<String>,
    #[arg(long)]
    // Override the OpenRouter model id used for answers
    model: Option<String>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    // create the tokio runtime
    let rt = Runtime::new().expect("Unable to create Runtime");

    // enter the runtime context
    // this variable must live as long as the app runs!
    let _enter = rt.enter();

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder {
            title: Some("AI Ethics Advisor".to_string()),
            inner_size: Some(egui::vec2(900.0, 700.0)),
            min_inner_size: Some(egui::vec2(600.0, 500.0)),
            ..Default::default()
        },
        ..Default::default()
    };

    let rt_handle = rt.handle().clone();

    eframe::run_native(
        "ethica",
        native_options,
        Box::new(move |cc| {
            // theme persistence and overriding
            let mut app_theme = "dark".to_string();
            if let Some(storage) = cc.storage {
                if let Some(prefs) = eframe::get_value::<gui::UiPrefs>(
                        storage, "ui_prefs") {
                    if !prefs.theme.is_empty() {
                        app_theme = prefs.theme;
                    }
                }
            }
            if let Some(theme) = args.theme {
                match theme.as_str() {
                    "light" | "dark" => app_theme = theme,
                    _ => {
                        log::warn!("Unsupported theme '{}'. \
                            Supported: 'light', 'dark'.", theme);
                    }
                }
            }
            if app_theme == "light" {
                cc.egui_ctx.set_theme(egui::Theme::Light);
            } else {
                cc.egui_ctx.set_theme(egui::Theme::Dark);
            }

            cc.egui_ctx.style_mut(|style| {
                // Show the url of a hyperlink on hover
                style.url_in_tooltip = true;
            });

            Ok(Box::new(gui::App::new(cc, rt_handle, args.model, app_theme)))
        }),
    )
}
