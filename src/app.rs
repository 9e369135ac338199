//! The eframe application shell.
//!
//! Startup follows the fixed sequence: load settings, load catalog (the one
//! blocking fetch), build the controller, then hand every frame to the UI.

use crate::cli::RuntimeOptions;
use fontpad_catalog::load_catalog;
use fontpad_config::FileSettingsStore;
use fontpad_editor::EditorController;
use fontpad_ui::EditorUi;

pub struct FontpadApp {
    ui: EditorUi<FileSettingsStore>,
}

impl FontpadApp {
    pub fn new(options: &RuntimeOptions) -> Self {
        let store = match &options.settings_file {
            Some(path) => FileSettingsStore::with_path(path.clone()),
            None => FileSettingsStore::new(),
        };
        log::info!("Settings path: {:?}", store.path());

        let catalog = load_catalog(&options.catalog);
        let controller = EditorController::new(store, catalog);
        Self {
            ui: EditorUi::new(controller),
        }
    }
}

impl eframe::App for FontpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.show(ctx);
    }
}
