//! Vela - chat folder sidebar for a messaging client
//!
//! This is the main entry point for the Vela desktop application.

use folders::{InMemoryFolderStore, Lang, Settings, StateFile};
use gpui::prelude::*;
use gpui::{Application, WindowOptions, px, size};
use gpui_component::{Theme, ThemeMode, TitleBar};
use log::{error, info, warn};
use std::sync::Arc;

mod app;
mod assets;
mod components;
mod demo;
mod input;

use app::VelaApp;
use assets::VelaAssets;

/// Load the configured state file, or the built-in sample
fn load_state(settings: &Settings) -> StateFile {
    match &settings.state_file {
        Some(path) => match StateFile::load(path) {
            Ok(state) => {
                info!("Loaded folder state from {}", path.display());
                state
            }
            Err(e) => {
                error!("Failed to load state file {}: {}", path.display(), e);
                demo::sample_state()
            }
        },
        None => demo::sample_state(),
    }
}

fn load_lang(settings: &Settings) -> Lang {
    let Some(overrides) = settings.lang_overrides_path() else {
        return Lang::load_or_default(&settings.language);
    };
    match Lang::load_with_overrides(&settings.language, &overrides) {
        Ok(lang) => lang,
        Err(e) => {
            warn!("Failed to apply language overrides: {}", e);
            Lang::load_or_default(&settings.language)
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {}", e);
        Settings::default()
    });
    // First run: leave an editable settings file behind
    if !Settings::exists() {
        if let Err(e) = settings.save() {
            warn!("Failed to write default settings: {}", e);
        }
    }
    let lang = load_lang(&settings);

    let mut state = load_state(&settings);
    state.limits = settings.apply_tier(state.limits);
    let store = match InMemoryFolderStore::from_state(state) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Invalid folder state: {}", e);
            Arc::new(InMemoryFolderStore::new())
        }
    };

    Application::new().with_assets(VelaAssets).run(move |cx| {
        // Initialize gpui-component and set dark mode
        gpui_component::init(cx);
        Theme::change(ThemeMode::Dark, None, cx);
        cx.bind_keys(input::bindings());

        let window_options = WindowOptions {
            window_bounds: Some(gpui::WindowBounds::Windowed(gpui::Bounds {
                origin: gpui::Point::default(),
                size: size(px(960.), px(680.)),
            })),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        let result = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| {
                let app = VelaApp::new(store.clone(), &settings, lang.clone(), cx);
                app.focus(window, cx);
                app
            })
        });

        match result {
            Ok(_) => info!("Vela started with language '{}'", lang.code()),
            Err(e) => error!("Failed to open window: {}", e),
        }
    });
}
