//! Main application module for CRX Builder
//!
//! This module implements the eframe App trait: it lays out the shell
//! (header, file tree sidebar, side menu, toast) around the current page and
//! turns widget outputs and shortcuts into state changes.

use crate::config::WindowSize;
use crate::preview::{copy_to_clipboard, open_in_browser, PreviewAction};
use crate::routes::Route;
use crate::state::{AppState, Page, Toast};
use crate::theme::{ThemeColors, ThemeManager};
use crate::ui::{home_page, not_found, template_page, FileTreePanel, Header, HeaderAction, SideMenu};
use eframe::egui;
use log::{debug, info, warn};

/// Keyboard shortcut actions that need to be deferred.
///
/// These actions are detected in the input handling closure and executed
/// afterwards to avoid borrow conflicts.
#[derive(Debug, Clone, Copy)]
enum KeyboardAction {
    /// Save the active editor (Ctrl+S)
    Save,
    /// Toggle the file tree sidebar (Ctrl+B)
    ToggleSidebar,
    /// Cycle theme (Ctrl+Shift+T)
    CycleTheme,
}

/// The main application struct that holds all state and implements eframe::App.
pub struct CrxBuilderApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl CrxBuilderApp {
    /// Create the app, loading settings from the config file.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_route: Route) -> Self {
        info!("Initializing CRX Builder");

        let state = AppState::new(initial_route);
        let mut theme_manager = ThemeManager::new(state.settings.theme);
        theme_manager.apply_if_needed(&cc.egui_ctx, None);
        info!("Applied initial theme: {:?}", state.settings.theme);

        Self {
            state,
            theme_manager,
            last_window_size: None,
            last_window_pos: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Update window size in settings if changed.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().outer_rect) else {
            return;
        };
        let size = rect.size();
        let pos = rect.min;

        let size_changed = self
            .last_window_size
            .map(|s| (s - size).length() > 1.0)
            .unwrap_or(true);
        let pos_changed = self
            .last_window_pos
            .map(|p| (p - pos).length() > 1.0)
            .unwrap_or(true);
        if !size_changed && !pos_changed {
            return;
        }

        self.last_window_size = Some(size);
        self.last_window_pos = Some(pos);
        let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
        self.state.settings.window_size = WindowSize {
            width: size.x,
            height: size.y,
            x: Some(pos.x),
            y: Some(pos.y),
            maximized,
        };
        self.state.mark_settings_dirty();
        debug!(
            "Window state updated: {}x{} at ({}, {}), maximized: {}",
            size.x, size.y, pos.x, pos.y, maximized
        );
    }

    /// Window title: "<page> - CRX Builder".
    fn window_title(&self) -> String {
        const APP_NAME: &str = "CRX Builder";

        match &self.state.page {
            Page::Home(_) => APP_NAME.to_string(),
            Page::Template(page) => format!("{} - {}", page.info().title, APP_NAME),
            Page::NotFound { .. } => format!("Not Found - {}", APP_NAME),
        }
    }

    /// Handle keyboard shortcuts.
    ///
    /// Escape for the side menu is handled by the menu itself.
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            if i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::T) {
                debug!("Keyboard shortcut: Ctrl+Shift+T (Cycle Theme)");
                return Some(KeyboardAction::CycleTheme);
            }
            if i.modifiers.command && !i.modifiers.shift && i.key_pressed(egui::Key::S) {
                debug!("Keyboard shortcut: Ctrl+S (Save)");
                return Some(KeyboardAction::Save);
            }
            if i.modifiers.command && i.key_pressed(egui::Key::B) {
                debug!("Keyboard shortcut: Ctrl+B (Toggle Sidebar)");
                return Some(KeyboardAction::ToggleSidebar);
            }
            None
        });

        match action {
            Some(KeyboardAction::Save) => {
                let time = self.get_app_time();
                self.state.save_active_editor(time);
            }
            Some(KeyboardAction::ToggleSidebar) => self.state.toggle_sidebar(),
            Some(KeyboardAction::CycleTheme) => self.handle_cycle_theme(),
            None => {}
        }
    }

    /// Cycle between light and dark themes.
    fn handle_cycle_theme(&mut self) {
        let new_theme = self.theme_manager.cycle();
        self.state.settings.theme = new_theme;
        self.state.mark_settings_dirty();
        info!("Theme cycled to: {:?}", new_theme);
    }

    fn handle_preview_action(&mut self, action: PreviewAction, document: &str) {
        let time = self.get_app_time();
        match action {
            PreviewAction::OpenInBrowser => match open_in_browser(document) {
                Ok(path) => self.state.show_toast(
                    "Preview opened",
                    format!("Running in your browser from {}", path.display()),
                    time,
                ),
                Err(e) => {
                    warn!("Failed to open preview: {}", e);
                    self.state.show_toast("Preview failed", e.to_string(), time);
                }
            },
            PreviewAction::CopyDocument => match copy_to_clipboard(document) {
                Ok(()) => self.state.show_toast(
                    "Copied",
                    "The preview document is on your clipboard.",
                    time,
                ),
                Err(e) => {
                    warn!("Failed to copy preview: {}", e);
                    self.state.show_toast("Copy failed", e.to_string(), time);
                }
            },
        }
    }

    /// Render the shell and the current page.
    fn render_ui(&mut self, ctx: &egui::Context) {
        let colors = self.theme_manager.colors();
        let narrow = self.state.ui.is_narrow();
        let is_home = matches!(self.state.page, Page::Home(_));

        let header_action = egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(colors.base.background)
                    .inner_margin(egui::Margin::symmetric(16.0, 4.0)),
            )
            .show(ctx, |ui| {
                Header::new(&self.theme_manager)
                    .narrow(narrow)
                    .sidebar_toggle(is_home)
                    .show(ui, &colors)
            })
            .inner;

        match header_action {
            Some(HeaderAction::ToggleSidebar) => self.state.toggle_sidebar(),
            Some(HeaderAction::OpenSideMenu) => self.state.toggle_side_menu(),
            Some(HeaderAction::CycleTheme) => self.handle_cycle_theme(),
            None => {}
        }

        let mut save_target = None;
        let mut preview_action = None;
        let mut use_template = false;
        let mut go_home = false;

        if let Page::Home(page) = &mut self.state.page {
            if self.state.ui.sidebar_open {
                let tree = FileTreePanel::new(page.files(), &mut page.tree)
                    .selected(page.editor.selected_name())
                    .width(self.state.settings.file_tree_width)
                    .show(ctx, &colors);
                if let Some(file) = tree.file_clicked {
                    page.select_file(file);
                }
                if let Some(width) = tree.new_width {
                    self.state.set_file_tree_width(width);
                }
            }
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(colors.base.background)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| match &mut self.state.page {
                Page::Home(page) => {
                    let output = home_page::show(ui, page, &self.state.settings, &colors, narrow);
                    save_target = output.save_requested;
                    preview_action = output.preview_action;
                }
                Page::Template(page) => {
                    use_template =
                        template_page::show(ui, page, &self.state.settings, &colors).use_template;
                }
                Page::NotFound { path } => {
                    go_home = not_found::show(ui, path, &colors);
                }
            });

        let time = self.get_app_time();
        if let Some(target) = save_target {
            self.state.show_save_toast(&target, time);
        }
        if let Some((action, document)) = preview_action {
            self.handle_preview_action(action, &document);
        }
        if use_template {
            if let Page::Template(page) = &self.state.page {
                let (title, description) = page.use_template_message();
                self.state.show_toast(title, description, time);
            }
        }
        if go_home {
            self.state.navigate_to(Route::Home);
        }

        if self.state.ui.side_menu_open {
            let menu = SideMenu::new(narrow).show(ctx, &colors);
            if let Some(path) = menu.navigate_to {
                self.state.navigate(&path);
            } else if menu.close_requested {
                self.state.close_side_menu();
            }
        }

        if let Some(toast) = &self.state.ui.toast {
            if show_toast(ctx, toast, &colors) {
                self.state.clear_toast();
            }
        }
    }
}

/// Draw the toast in the bottom-right corner. Returns `true` when clicked.
fn show_toast(ctx: &egui::Context, toast: &Toast, colors: &ThemeColors) -> bool {
    egui::Area::new(egui::Id::new("toast"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors.base.background)
                .stroke(egui::Stroke::new(1.0, colors.base.border))
                .inner_margin(egui::Margin::same(14.0))
                .show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.label(egui::RichText::new(&toast.title).strong());
                    ui.label(egui::RichText::new(&toast.description).color(colors.text.muted));
                })
                .response
                .interact(egui::Sense::click())
                .on_hover_text("Click to dismiss")
                .clicked()
        })
        .inner
}

impl eframe::App for CrxBuilderApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply theme if needed (handles System theme changes)
        let system_dark = frame
            .info()
            .system_theme
            .map(|theme| theme == eframe::Theme::Dark);
        self.theme_manager.apply_if_needed(ctx, system_dark);

        // Update toast message (clear if expired)
        let current_time = self.get_app_time();
        self.state.update_toast(current_time);
        if let Some(toast) = &self.state.ui.toast {
            let remaining = (toast.expires_at - current_time).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
        }

        self.state.on_viewport_width(ctx.screen_rect().width());

        let title = self.window_title();
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));

        self.update_window_state(ctx);

        self.render_ui(ctx);

        // Handle keyboard shortcuts AFTER render so editor edits land first
        self.handle_keyboard_shortcuts(ctx);
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.shutdown();
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        debug!("Saving application state");
        self.state.save_settings_if_dirty();
    }

    /// Auto-save interval in seconds.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}
