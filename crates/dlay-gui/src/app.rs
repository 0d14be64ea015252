//! Standalone DLAY application.

use crate::host_store::HostParamStore;
use crate::preset_manager::PresetManager;
use dlay_config::{Preset, find_preset};
use dlay_gui_core::DelayEditor;
use eframe::egui::{self, Context, TopBottomPanel, ViewportCommand};
use std::sync::Arc;

/// Height of the menu and status bars in logical pixels at scale 1.
const CHROME_HEIGHT: f32 = 56.0;

/// Scale factors offered in the View menu.
const UI_SCALES: [f32; 4] = [1.0, 1.25, 1.5, 2.0];

/// Window size for the editor plus the menu and status bars.
pub fn window_size(editor: &DelayEditor) -> egui::Vec2 {
    editor.size() + egui::vec2(0.0, CHROME_HEIGHT * editor.theme().scale)
}

/// Startup options, usually from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI scale factor.
    pub scale: f32,
    /// Tempo used to display synced delay times.
    pub bpm: f32,
    /// Preset to load at startup: a factory/user preset name or a file path.
    pub preset: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            bpm: 120.0,
            preset: None,
        }
    }
}

/// Main application state.
pub struct DlayApp {
    editor: DelayEditor,
    store: Arc<HostParamStore>,
    presets: PresetManager,
    bpm: f32,
    /// Editor pushes seen so far, to notice user edits.
    seen_edits: u64,
    show_save_dialog: bool,
    new_preset_name: String,
    status: Option<String>,
}

impl DlayApp {
    /// Create the app and install the editor theme.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let mut app = Self::headless(config, PresetManager::new());
        app.editor.setup(&cc.egui_ctx);
        app
    }

    /// Create the app without a window, e.g. for tests.
    pub fn headless(config: &AppConfig, presets: PresetManager) -> Self {
        let mut app = Self {
            editor: DelayEditor::new(config.scale),
            store: Arc::new(HostParamStore::new()),
            presets,
            bpm: if config.bpm.is_finite() && config.bpm > 0.0 {
                config.bpm
            } else {
                120.0
            },
            seen_edits: 0,
            show_save_dialog: false,
            new_preset_name: String::new(),
            status: None,
        };
        if let Some(name) = &config.preset {
            app.load_named_preset(name);
        }
        app.sync_from_store();
        app
    }

    /// The parameter store the editor writes into.
    pub fn store(&self) -> &Arc<HostParamStore> {
        &self.store
    }

    /// The hosted editor.
    pub fn editor(&self) -> &DelayEditor {
        &self.editor
    }

    /// The preset menu model.
    pub fn presets(&self) -> &PresetManager {
        &self.presets
    }

    /// Last status message (errors from preset operations).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Load a preset by menu name, user preset name, or file path.
    ///
    /// Failures are logged and shown in the status bar; the current values
    /// stay in place.
    pub fn load_named_preset(&mut self, name: &str) {
        if let Some(index) = self.presets.position(name) {
            self.presets.select(index, &self.store);
            self.status = None;
            return;
        }
        if let Some(index) = dlay_config::FACTORY_PRESET_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .filter(|&i| i < self.presets.presets().len())
        {
            self.presets.select(index, &self.store);
            self.status = None;
            return;
        }

        let result = find_preset(name)
            .ok_or_else(|| dlay_config::ConfigError::PresetNotFound(name.to_string()))
            .and_then(Preset::load);
        match result {
            Ok(preset) => {
                self.store.load_preset(&preset);
                self.status = None;
            }
            Err(err) => {
                tracing::error!(%err, "could not load preset");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Change the UI scale and resize the window to fit.
    pub fn set_scale(&mut self, ctx: &Context, scale: f32) {
        self.editor.set_scale(scale);
        let size = window_size(&self.editor);
        tracing::debug!(scale = self.editor.theme().scale, "ui scale changed");
        ctx.send_viewport_cmd(ViewportCommand::MinInnerSize(size));
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
    }

    /// Delete the selected user preset file.
    ///
    /// Factory presets and an empty selection leave an error in the status
    /// bar.
    pub fn delete_current_preset(&mut self) {
        let result = match self.presets.current_index() {
            Some(index) => self.presets.delete(index),
            None => Err(dlay_config::ConfigError::PresetNotFound(
                "<none selected>".to_string(),
            )),
        };
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                tracing::warn!(%err, "could not delete preset");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Forward out-of-band store changes to the editor and track edits.
    pub fn sync_from_store(&mut self) {
        for (param, value) in self.store.take_dirty() {
            self.editor.parameter_changed(param.index(), value);
        }
        let edits = self.store.edit_count();
        if edits != self.seen_edits {
            self.seen_edits = edits;
            self.presets.mark_modified();
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            let mut selected = None;
            ui.menu_button("Presets", |ui| {
                let current = self.presets.current_index();
                let mut factory_done = false;
                for (i, entry) in self.presets.presets().iter().enumerate() {
                    if !entry.is_factory() && !factory_done {
                        ui.separator();
                        factory_done = true;
                    }
                    if ui
                        .selectable_label(current == Some(i), &entry.preset.name)
                        .clicked()
                    {
                        selected = Some(i);
                        ui.close_menu();
                    }
                }
            });
            if let Some(index) = selected {
                self.presets.select(index, &self.store);
            }

            ui.menu_button("Edit", |ui| {
                if ui.button("Save").clicked() {
                    if let Err(err) = self.presets.save_current(&self.store) {
                        self.status = Some(err.to_string());
                    }
                    ui.close_menu();
                }
                if ui.button("Save As…").clicked() {
                    self.show_save_dialog = true;
                    self.new_preset_name = self
                        .presets
                        .current()
                        .map(|e| e.preset.name.clone())
                        .unwrap_or_default();
                    ui.close_menu();
                }
                let can_delete = self.presets.current().is_some_and(|e| !e.is_factory());
                if ui
                    .add_enabled(can_delete, egui::Button::new("Delete preset"))
                    .clicked()
                {
                    self.delete_current_preset();
                    ui.close_menu();
                }
                if ui.button("Reload presets").clicked() {
                    self.presets.reload();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Reset all").clicked() {
                    self.store.reset_all();
                    self.presets.mark_modified();
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                let current = self.editor.theme().scale;
                for scale in UI_SCALES {
                    let label = format!("{:.0}%", scale * 100.0);
                    if ui.selectable_label(current == scale, label).clicked() {
                        self.set_scale(ui.ctx(), scale);
                        ui.close_menu();
                    }
                }
            });
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        let shadow = self.editor.shadow();
        ui.horizontal(|ui| {
            let name = self
                .presets
                .current()
                .map_or("Init", |e| e.preset.name.as_str());
            let marker = if self.presets.is_modified() { "*" } else { "" };
            ui.label(format!("{name}{marker}"));
            ui.separator();
            ui.label(format!("{:.0} ms", shadow.effective_time_ms(self.bpm)));
            if shadow.sync {
                ui.label(format!("({} @ {:.0} BPM)", shadow.sync_ratio.label(), self.bpm));
            }
            if let Some(status) = &self.status {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(230, 120, 110), status);
            }
        });
    }

    fn render_save_dialog(&mut self, ctx: &Context) {
        if !self.show_save_dialog {
            return;
        }
        egui::Window::new("Save Preset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut self.new_preset_name);
                });
                ui.horizontal(|ui| {
                    let name = self.new_preset_name.trim().to_string();
                    if ui
                        .add_enabled(!name.is_empty(), egui::Button::new("Save"))
                        .clicked()
                    {
                        match self.presets.save_as(&name, None, &self.store) {
                            Ok(_) => self.status = None,
                            Err(err) => self.status = Some(err.to_string()),
                        }
                        self.show_save_dialog = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_save_dialog = false;
                    }
                });
            });
    }
}

impl eframe::App for DlayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_from_store();

        TopBottomPanel::top("menu").show(ctx, |ui| self.render_menu(ui));
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(2.0);
            self.render_status_bar(ui);
            ui.add_space(2.0);
        });
        self.render_save_dialog(ctx);

        let store = Arc::clone(&self.store);
        self.editor.show(ctx, &*store);

        // Menu actions land in the store; show them this frame.
        self.sync_from_store();
    }
}
