//! Theme Manager for CRX Builder
//!
//! Holds the current `Theme` preference and applies the matching egui
//! `Visuals`. Visuals are rebuilt only when the theme changes or, for
//! `Theme::System`, when the platform dark-mode flag flips.

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::ThemeColors;
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme setting (Light, Dark, or System)
    current_theme: Theme,
    /// Cached visuals for the current theme
    cached_visuals: Option<Visuals>,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
    /// Last seen platform dark-mode flag (for System theme)
    last_system_dark_mode: Option<bool>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            cached_visuals: None,
            needs_apply: true,
            last_system_dark_mode: None,
        }
    }

    /// Set the theme and mark it for reapplication on the next frame.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.cached_visuals = None;
            self.needs_apply = true;
        }
    }

    /// Cycle between Light and Dark (System goes to Light).
    ///
    /// Returns the new theme.
    pub fn cycle(&mut self) -> Theme {
        let new_theme = match self.current_theme {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::System => Theme::Light,
        };
        self.set_theme(new_theme);
        new_theme
    }

    /// Apply the theme if it changed since the last call.
    ///
    /// `system_dark` is the platform preference reported by the window
    /// (`None` when unknown). Returns `true` if visuals were applied.
    pub fn apply_if_needed(&mut self, ctx: &Context, system_dark: Option<bool>) -> bool {
        if self.current_theme == Theme::System {
            let dark = system_dark.unwrap_or(true);
            if self.last_system_dark_mode != Some(dark) {
                debug!("System dark mode changed to: {}", dark);
                self.last_system_dark_mode = Some(dark);
                self.cached_visuals = None;
                self.needs_apply = true;
            }
        }

        if !self.needs_apply {
            return false;
        }

        let visuals = self.visuals();
        ctx.set_visuals(visuals);
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
        true
    }

    fn visuals(&mut self) -> Visuals {
        if let Some(visuals) = &self.cached_visuals {
            return visuals.clone();
        }
        let visuals = self.colors().to_visuals();
        self.cached_visuals = Some(visuals.clone());
        visuals
    }

    /// Whether the effective theme is dark.
    pub fn is_dark(&self) -> bool {
        match self.current_theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => self.last_system_dark_mode.unwrap_or(true),
        }
    }

    /// Palette for the effective theme.
    pub fn colors(&self) -> ThemeColors {
        if self.is_dark() {
            ThemeColors::dark()
        } else {
            ThemeColors::light()
        }
    }

    /// Icon for the header theme button.
    pub fn icon(&self) -> &'static str {
        match self.current_theme {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
            Theme::System => "💻",
        }
    }

    pub fn tooltip(&self) -> String {
        format!("{} theme (click to switch)", self.current_theme.label())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_manager_new() {
        let manager = ThemeManager::new(Theme::Dark);
        assert_eq!(manager.current_theme, Theme::Dark);
        assert!(manager.needs_apply);
    }

    #[test]
    fn test_set_same_theme_does_not_reapply() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.needs_apply = false;

        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply);

        manager.set_theme(Theme::Dark);
        assert!(manager.needs_apply);
    }

    #[test]
    fn test_cycle() {
        let mut manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.cycle(), Theme::Dark);
        assert_eq!(manager.cycle(), Theme::Light);

        manager.set_theme(Theme::System);
        assert_eq!(manager.cycle(), Theme::Light);
    }

    #[test]
    fn test_apply_if_needed() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);

        assert!(manager.apply_if_needed(&ctx, None));
        assert!(!ctx.style().visuals.dark_mode);
        assert!(!manager.apply_if_needed(&ctx, None));
    }

    #[test]
    fn test_system_theme_follows_platform() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::System);

        assert!(manager.apply_if_needed(&ctx, Some(false)));
        assert!(!manager.is_dark());
        assert!(!manager.apply_if_needed(&ctx, Some(false)));

        assert!(manager.apply_if_needed(&ctx, Some(true)));
        assert!(manager.is_dark());
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_icons() {
        let mut manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.icon(), "☀");
        manager.set_theme(Theme::Dark);
        assert_eq!(manager.icon(), "🌙");
    }
}
