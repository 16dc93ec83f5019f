//! Application state management for CRX Builder
//!
//! The shell (`UiState`) lives for the whole session: sidebar and side menu
//! visibility, the toast, and the last viewport classification. Page state
//! (`Page`) is created when a route is entered and dropped when it is left,
//! so buffers, tab choices and folder states start fresh on every visit.

use crate::config::{load_config, save_config_silent, Settings};
use crate::editor::{EditorLanguage, EditorTab};
use crate::project::{
    starter_project, template, FileNode, SelectedFile, TemplateInfo, TemplateKind, TreeViewState,
};
use crate::routes::Route;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PAGE_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// A number no other page mounted in this session has.
fn next_page_instance() -> u64 {
    NEXT_PAGE_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// Identity of the buffer an editor widget shows: (page instance, buffer).
///
/// Editor widget ids are derived from it. egui keeps cursor and undo history
/// per widget id, so a buffer opened later (or on a later visit of the page)
/// never starts with another buffer's history.
pub type BufferKey = (u64, u64);

// ─────────────────────────────────────────────────────────────────────────────
// Home Page State
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level tab of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Editor,
    Preview,
}

impl MainTab {
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Editor => "Editor",
            MainTab::Preview => "Preview",
        }
    }
}

/// The home page buffers.
///
/// The three language buffers always feed the preview. A file picked from
/// the tree is edited as a separate copy in `selected_file` and never flows
/// back into the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub html: String,
    pub css: String,
    pub js: String,
    pub selected_file: Option<SelectedFile>,
}

impl EditorState {
    /// Name of the selected file, for the tree highlight.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected_file.as_ref().map(|file| file.name.as_str())
    }
}

/// State owned by the home page while it is shown.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub editor: EditorState,
    pub main_tab: MainTab,
    pub editor_tab: EditorTab,
    pub tree: TreeViewState,
    instance: u64,
    /// Bumped every time a tree file is opened
    opened_files: u64,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            editor: EditorState::default(),
            main_tab: MainTab::default(),
            editor_tab: EditorTab::default(),
            tree: TreeViewState::new(),
            instance: next_page_instance(),
            opened_files: 0,
        }
    }

    /// Key of the HTML/CSS/JavaScript buffers for this visit of the page.
    pub fn tabs_key(&self) -> BufferKey {
        (self.instance, 0)
    }

    /// Key of the file currently opened from the tree.
    pub fn selected_file_key(&self) -> BufferKey {
        (self.instance, self.opened_files)
    }

    /// The project tree shown in the sidebar.
    pub fn files(&self) -> &'static [FileNode] {
        starter_project()
    }

    /// Open a copy of a tree file in the editor.
    pub fn select_file(&mut self, file: SelectedFile) {
        info!("Selected file: {}", file.name);
        self.opened_files += 1;
        self.editor.selected_file = Some(file);
        self.main_tab = MainTab::Editor;
    }

    /// Go back to the HTML/CSS/JavaScript tabs.
    pub fn close_file(&mut self) {
        if let Some(file) = self.editor.selected_file.take() {
            debug!("Closed file: {}", file.name);
        }
    }

    /// Language of the buffer the editor currently shows.
    pub fn active_language(&self) -> EditorLanguage {
        match &self.editor.selected_file {
            Some(file) => EditorLanguage::from_file_name(&file.name),
            None => self.editor_tab.language(),
        }
    }

    /// Name the save toast confirms: the open file, or the active language.
    pub fn save_target(&self) -> String {
        match &self.editor.selected_file {
            Some(file) => file.name.clone(),
            None => self.editor_tab.label().to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Template Page State
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by a template page while it is shown.
#[derive(Debug, Clone)]
pub struct TemplatePage {
    pub kind: TemplateKind,
    pub tree: TreeViewState,
    pub selected_file: Option<SelectedFile>,
    instance: u64,
    viewed_files: u64,
}

impl TemplatePage {
    pub fn new(kind: TemplateKind) -> Self {
        Self {
            kind,
            tree: TreeViewState::new(),
            selected_file: None,
            instance: next_page_instance(),
            viewed_files: 0,
        }
    }

    /// Show a template file in the read-only viewer.
    pub fn view_file(&mut self, file: SelectedFile) {
        info!("Viewing template file: {}", file.name);
        self.viewed_files += 1;
        self.selected_file = Some(file);
    }

    /// Key of the file in the viewer.
    pub fn viewer_key(&self) -> BufferKey {
        (self.instance, self.viewed_files)
    }

    pub fn info(&self) -> &'static TemplateInfo {
        template(self.kind)
    }

    /// Title and description of the "Use This Template" confirmation.
    pub fn use_template_message(&self) -> (String, String) {
        (
            "Template Selected".to_string(),
            format!("{} template has been loaded!", self.info().title),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

/// The page currently shown, with the state it owns.
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomePage),
    Template(TemplatePage),
    NotFound { path: String },
}

impl Page {
    /// Create fresh page state for `route`.
    pub fn for_route(route: &Route) -> Self {
        if route.renders_not_found() {
            let path = route.path();
            warn!(
                "404 Error: User attempted to access non-existent route: {}",
                path
            );
            return Page::NotFound { path };
        }

        match route {
            Route::Template(kind) => Page::Template(TemplatePage::new(*kind)),
            _ => Page::Home(HomePage::new()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Window width class driving the responsive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn classify(width: f32, narrow_breakpoint: f32) -> Self {
        if width < narrow_breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// A notification shown in the corner until it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    /// Expiry time in seconds since app start
    pub expires_at: f64,
}

/// Shell state that survives navigation.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the file tree sidebar is shown (home page)
    pub sidebar_open: bool,
    /// Whether the navigation side menu is shown
    pub side_menu_open: bool,
    /// Active toast, if any
    pub toast: Option<Toast>,
    /// Viewport class seen on the previous frame
    pub viewport: Option<ViewportClass>,
}

impl UiState {
    pub fn is_narrow(&self) -> bool {
        self.viewport == Some(ViewportClass::Narrow)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state.
///
/// # Example
///
/// ```ignore
/// let mut state = AppState::with_settings(Settings::default(), Route::Home);
/// state.navigate("/templates/serp-analyzer");
/// ```
#[derive(Debug)]
pub struct AppState {
    /// User settings (loaded from config)
    pub settings: Settings,
    /// Current route
    route: Route,
    /// State of the page for the current route
    pub page: Page,
    /// Shell UI state
    pub ui: UiState,
    /// Whether settings changed since the last save
    settings_dirty: bool,
}

impl AppState {
    /// Create state with settings loaded from the config file.
    pub fn new(initial_route: Route) -> Self {
        Self::with_settings(load_config(), initial_route)
    }

    pub fn with_settings(settings: Settings, initial_route: Route) -> Self {
        info!("AppState initialized at route {}", initial_route.path());
        let page = Page::for_route(&initial_route);
        Self {
            settings,
            route: initial_route,
            page,
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    #[cfg(test)]
    pub fn route(&self) -> &Route {
        &self.route
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    #[cfg(test)]
    pub fn settings_dirty(&self) -> bool {
        self.settings_dirty
    }

    /// Remember a resized file tree width.
    pub fn set_file_tree_width(&mut self, width: f32) {
        let width = width.clamp(Settings::MIN_FILE_TREE_WIDTH, Settings::MAX_FILE_TREE_WIDTH);
        if (width - self.settings.file_tree_width).abs() > 0.5 {
            debug!("File tree width changed to {}", width);
            self.settings.file_tree_width = width;
            self.mark_settings_dirty();
        }
    }

    /// Save settings if they changed. Returns `true` if a save happened.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if !self.settings_dirty {
            return false;
        }
        if save_config_silent(&self.settings) {
            self.settings_dirty = false;
            true
        } else {
            false
        }
    }

    /// Final save before the window closes.
    pub fn shutdown(&mut self) {
        info!("Shutting down, saving settings");
        self.settings_dirty = true;
        self.save_settings_if_dirty();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Go to `path`, replacing the current page state.
    ///
    /// The side menu closes on every navigation.
    pub fn navigate(&mut self, path: &str) {
        self.navigate_to(Route::resolve(path));
    }

    pub fn navigate_to(&mut self, route: Route) {
        info!("Navigating from {} to {}", self.route.path(), route.path());
        self.page = Page::for_route(&route);
        self.route = route;
        self.ui.side_menu_open = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────────────────────

    /// Record the window width for this frame.
    ///
    /// When the viewport class changes (the first call always counts as a
    /// change) the sidebar opens on wide windows and closes on narrow ones.
    /// Returns `true` on a class change.
    pub fn on_viewport_width(&mut self, width: f32) -> bool {
        let class = ViewportClass::classify(width, self.settings.narrow_breakpoint);
        if self.ui.viewport == Some(class) {
            return false;
        }

        debug!("Viewport class changed to {:?} ({}px)", class, width);
        self.ui.viewport = Some(class);
        self.ui.sidebar_open = class == ViewportClass::Wide;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.ui.sidebar_open = !self.ui.sidebar_open;
    }

    pub fn toggle_side_menu(&mut self) {
        self.ui.side_menu_open = !self.ui.side_menu_open;
    }

    pub fn close_side_menu(&mut self) {
        self.ui.side_menu_open = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a toast for the configured duration, replacing any current one.
    pub fn show_toast(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        current_time: f64,
    ) {
        let toast = Toast {
            title: title.into(),
            description: description.into(),
            expires_at: current_time + self.settings.toast_duration_secs,
        };
        info!("Toast: {} - {}", toast.title, toast.description);
        self.ui.toast = Some(toast);
    }

    /// Clear the toast once it has expired.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(toast) = &self.ui.toast {
            if current_time >= toast.expires_at {
                self.ui.toast = None;
            }
        }
    }

    /// Dismiss the toast early.
    pub fn clear_toast(&mut self) {
        self.ui.toast = None;
    }

    /// Confirm a save of the home page's active editor.
    ///
    /// Nothing is written anywhere; the toast is the whole effect. Returns
    /// `false` when the current page has no editor.
    pub fn save_active_editor(&mut self, current_time: f64) -> bool {
        let Page::Home(home) = &self.page else {
            return false;
        };
        let target = home.save_target();
        self.show_save_toast(&target, current_time);
        true
    }

    /// Show the "Changes saved" toast for `target`.
    pub fn show_save_toast(&mut self, target: &str, current_time: f64) {
        self.show_toast(
            "Changes saved",
            format!("{} has been saved successfully.", target),
            current_time,
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_settings(Settings::default(), Route::Home)
    }

    fn home(state: &mut AppState) -> &mut HomePage {
        match &mut state.page {
            Page::Home(home) => home,
            other => panic!("expected home page, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_dirty_flag() {
        let mut state = state();
        assert!(!state.settings_dirty());
        assert!(!state.save_settings_if_dirty());
        state.mark_settings_dirty();
        assert!(state.settings_dirty());
    }

    #[test]
    fn test_file_tree_resize_marks_settings_dirty() {
        let mut state = state();
        state.set_file_tree_width(state.settings.file_tree_width);
        assert!(!state.settings_dirty());

        state.set_file_tree_width(320.0);
        assert_eq!(state.settings.file_tree_width, 320.0);
        assert!(state.settings_dirty());

        state.set_file_tree_width(9000.0);
        assert_eq!(state.settings.file_tree_width, Settings::MAX_FILE_TREE_WIDTH);
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.route(), &Route::Home);
        assert!(matches!(state.page, Page::Home(_)));
        assert!(!state.ui.sidebar_open);
        assert!(!state.ui.side_menu_open);
        assert!(state.ui.toast.is_none());
    }

    #[test]
    fn test_first_viewport_counts_as_change() {
        let mut state = state();
        assert!(state.on_viewport_width(1280.0));
        assert!(state.ui.sidebar_open);

        let mut narrow = AppState::with_settings(Settings::default(), Route::Home);
        assert!(narrow.on_viewport_width(500.0));
        assert!(!narrow.ui.sidebar_open);
        assert!(narrow.ui.is_narrow());
    }

    #[test]
    fn test_sidebar_follows_class_changes_only() {
        let mut state = state();
        state.on_viewport_width(1280.0);

        // A manual toggle survives resizes within the same class.
        state.toggle_sidebar();
        assert!(!state.on_viewport_width(1000.0));
        assert!(!state.ui.sidebar_open);

        assert!(state.on_viewport_width(700.0));
        assert!(!state.ui.sidebar_open);
        state.toggle_sidebar();
        assert!(state.ui.sidebar_open);

        assert!(state.on_viewport_width(768.0));
        assert!(state.ui.sidebar_open);
    }

    #[test]
    fn test_navigation_recreates_page_state() {
        let mut state = state();
        home(&mut state).editor.html = "<p>draft</p>".to_string();
        home(&mut state).main_tab = MainTab::Preview;

        state.navigate("/templates/backlink-analyzer");
        assert!(matches!(
            &state.page,
            Page::Template(page) if page.kind == TemplateKind::BacklinkAnalyzer
        ));

        state.navigate("/");
        let page = home(&mut state);
        assert!(page.editor.html.is_empty());
        assert_eq!(page.main_tab, MainTab::Editor);
    }

    #[test]
    fn test_navigation_closes_side_menu() {
        let mut state = state();
        state.toggle_side_menu();
        assert!(state.ui.side_menu_open);

        state.navigate("/settings");
        assert!(!state.ui.side_menu_open);
        assert_eq!(state.route(), &Route::Settings);
        assert!(matches!(&state.page, Page::NotFound { path } if path == "/settings"));
    }

    #[test]
    fn test_unknown_route_page() {
        let mut state = state();
        state.navigate("/does/not/exist");
        assert!(matches!(&state.page, Page::NotFound { path } if path == "/does/not/exist"));
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut state = state();
        state.show_toast("Title", "Body", 10.0);

        let toast = state.ui.toast.clone().unwrap();
        assert_eq!(toast.title, "Title");
        assert_eq!(toast.expires_at, 10.0 + state.settings.toast_duration_secs);

        state.update_toast(11.0);
        assert!(state.ui.toast.is_some());
        state.update_toast(toast.expires_at);
        assert!(state.ui.toast.is_none());

        state.show_toast("Title", "Body", 20.0);
        state.clear_toast();
        assert!(state.ui.toast.is_none());
    }

    #[test]
    fn test_save_toast_names_language_or_file() {
        let mut state = state();
        home(&mut state).editor_tab = EditorTab::Css;
        assert!(state.save_active_editor(0.0));
        assert_eq!(
            state.ui.toast.as_ref().map(|t| t.description.as_str()),
            Some("CSS has been saved successfully.")
        );

        home(&mut state).select_file(SelectedFile {
            name: "popup.js".to_string(),
            content: String::new(),
        });
        state.save_active_editor(0.0);
        let toast = state.ui.toast.clone().unwrap();
        assert_eq!(toast.title, "Changes saved");
        assert_eq!(toast.description, "popup.js has been saved successfully.");
    }

    #[test]
    fn test_save_without_editor_is_noop() {
        let mut state = AppState::with_settings(
            Settings::default(),
            Route::Template(TemplateKind::SerpAnalyzer),
        );
        assert!(!state.save_active_editor(0.0));
        assert!(state.ui.toast.is_none());
    }

    #[test]
    fn test_selected_file_language_and_close() {
        let mut page = HomePage::new();
        assert_eq!(page.active_language(), EditorLanguage::Html);

        page.main_tab = MainTab::Preview;
        page.select_file(SelectedFile {
            name: "styles.css".to_string(),
            content: "a {}".to_string(),
        });
        assert_eq!(page.main_tab, MainTab::Editor);
        assert_eq!(page.active_language(), EditorLanguage::Css);
        assert_eq!(page.editor.selected_name(), Some("styles.css"));

        page.close_file();
        assert!(page.editor.selected_file.is_none());
        assert_eq!(page.active_language(), EditorLanguage::Html);
    }

    #[test]
    fn test_buffer_keys_change_per_file_and_visit() {
        let mut state = state();
        let tabs = home(&mut state).tabs_key();
        let before = home(&mut state).selected_file_key();
        home(&mut state).select_file(SelectedFile {
            name: "popup.html".to_string(),
            content: String::new(),
        });
        assert_ne!(home(&mut state).selected_file_key(), before);
        assert_eq!(home(&mut state).tabs_key(), tabs);

        state.navigate("/");
        assert_ne!(home(&mut state).tabs_key(), tabs);

        let mut template = TemplatePage::new(TemplateKind::SerpAnalyzer);
        let first = template.viewer_key();
        template.view_file(SelectedFile {
            name: "manifest.json".to_string(),
            content: "{}".to_string(),
        });
        assert_ne!(template.viewer_key(), first);
        assert_eq!(template.selected_file.as_ref().map(|f| f.name.as_str()), Some("manifest.json"));
        assert_ne!(
            TemplatePage::new(TemplateKind::SerpAnalyzer).viewer_key(),
            first
        );
    }

    #[test]
    fn test_use_template_message() {
        let page = TemplatePage::new(TemplateKind::KeywordResearch);
        let (title, description) = page.use_template_message();
        assert_eq!(title, "Template Selected");
        assert_eq!(description, "Keyword Research Tool template has been loaded!");
    }
}
