//! The editor panel: controls row, text surface, status line.

use fontpad_catalog::{Variant, label_for};
use fontpad_config::SettingsStore;
use fontpad_editor::{EXPORT_FILE_NAME, EditorController, EditorEvent};

/// Standard width for combo boxes
const COMBO_WIDTH: f32 = 200.0;

/// Point size of the text surface
const EDITOR_FONT_SIZE: f32 = 16.0;

/// Renders the editor and feeds user actions to the controller.
pub struct EditorUi<S: SettingsStore> {
    controller: EditorController<S>,
    /// Text bound to the multi-line widget, synced from the controller on
    /// actions that replace the content (reset).
    content_buffer: String,
    /// Outcome of the last save/reset action, shown in the status line.
    status: Option<String>,
}

impl<S: SettingsStore> EditorUi<S> {
    pub fn new(controller: EditorController<S>) -> Self {
        let content_buffer = controller.state().content.clone();
        let status = if controller.catalog().is_empty() {
            Some("Font catalog unavailable, family selection is disabled".to_string())
        } else {
            None
        };
        Self {
            controller,
            content_buffer,
            status,
        }
    }

    pub fn controller(&self) -> &EditorController<S> {
        &self.controller
    }

    /// Draw one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("editor_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("editor_status").show(ctx, |ui| {
            self.show_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_text_surface(ui);
        });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Family:");
            let families: Vec<String> = self
                .controller
                .family_options()
                .map(str::to_string)
                .collect();
            let mut selected = self.controller.state().family.clone();
            egui::ComboBox::from_id_salt("editor_family_select")
                .width(COMBO_WIDTH)
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for family in &families {
                        ui.selectable_value(&mut selected, family.clone(), family.as_str());
                    }
                });
            if selected != self.controller.state().family {
                self.controller
                    .handle(EditorEvent::FamilySelected(selected));
            }

            ui.add_enabled_ui(self.controller.is_ready(), |ui| {
                ui.label("Variant:");
                let current_variant = self.controller.state().variant;
                let tokens = self.controller.variant_tokens().to_vec();
                let mut picked: Option<String> = None;
                egui::ComboBox::from_id_salt("editor_variant_select")
                    .width(COMBO_WIDTH)
                    .selected_text(current_variant.label())
                    .show_ui(ui, |ui| {
                        for token in &tokens {
                            let is_current =
                                Variant::from_token(token) == Some(current_variant);
                            if ui.selectable_label(is_current, label_for(token)).clicked() {
                                picked = Some(token.clone());
                            }
                        }
                    });
                if let Some(token) = picked {
                    self.controller.handle(EditorEvent::VariantSelected(token));
                }

                let mut italic = self.controller.italic_toggle();
                if ui.checkbox(&mut italic, "Italic").changed() {
                    self.controller.handle(EditorEvent::ItalicToggled(italic));
                }
            });

            ui.separator();

            if ui
                .button("Reset")
                .on_hover_text("Restore the default family, variant, and empty content")
                .clicked()
            {
                self.controller.handle(EditorEvent::ResetPressed);
                self.content_buffer = self.controller.state().content.clone();
                self.status = Some("Settings reset to defaults".to_string());
            }

            if ui
                .button("Save to file…")
                .on_hover_text("Export the current text as a plain-text file")
                .clicked()
            {
                self.export_with_dialog();
            }
        });
    }

    fn show_text_surface(&mut self, ui: &mut egui::Ui) {
        let style = self.controller.style().cloned();
        let mut layouter = move |ui: &egui::Ui, buf: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut format = egui::TextFormat {
                font_id: egui::FontId::proportional(EDITOR_FONT_SIZE),
                color: ui.visuals().text_color(),
                ..Default::default()
            };
            if let Some(ref style) = style {
                format.italics = style.italic;
            }
            let mut job = egui::text::LayoutJob::default();
            job.append(buf.as_str(), 0.0, format);
            job.wrap.max_width = wrap_width;
            ui.fonts_mut(|fonts| fonts.layout_job(job))
        };

        let response = ui.add_sized(
            ui.available_size(),
            egui::TextEdit::multiline(&mut self.content_buffer)
                .id_salt("editor_text_surface")
                .layouter(&mut layouter),
        );
        if response.changed() {
            self.controller
                .handle(EditorEvent::ContentEdited(self.content_buffer.clone()));
        }
    }

    fn show_status(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.controller.style() {
                Some(style) => {
                    ui.label(format!(
                        "{} · {} · {}",
                        style.family,
                        style.weight,
                        style.slant_keyword()
                    ));
                }
                None => {
                    ui.label("No style applied");
                }
            }
            if let Some(ref status) = self.status {
                ui.separator();
                ui.label(status.clone());
            }
        });
    }

    /// Ask for an export location (defaulting to the Downloads directory and
    /// the fixed artifact name) and write the content there.
    fn export_with_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_file_name(EXPORT_FILE_NAME);
        if let Some(downloads) = dirs::download_dir() {
            dialog = dialog.set_directory(downloads);
        }

        let Some(path) = dialog.save_file() else {
            log::debug!("Export cancelled");
            return;
        };

        match self.controller.export_to(&path) {
            Ok(()) => {
                self.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::warn!("Export to {} failed: {e}", path.display());
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }
}
