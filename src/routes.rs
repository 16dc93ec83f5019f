//! Route table
//!
//! Pages are addressed by web-style paths so the side menu, the command line
//! and the not-found page all speak the same language.

use crate::project::TemplateKind;

/// Prefix of the template page paths.
const TEMPLATE_PREFIX: &str = "/templates/";

/// A resolved page address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Template(TemplateKind),
    /// Menu placeholder, renders the not-found page
    Settings,
    /// Menu placeholder, renders the not-found page
    Files,
    /// Menu placeholder, renders the not-found page
    Api,
    /// Anything else, keeping the requested path
    NotFound(String),
}

impl Route {
    /// Resolve a path. A single trailing slash is ignored.
    pub fn resolve(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/" => Route::Home,
            "/settings" => Route::Settings,
            "/files" => Route::Files,
            "/api" => Route::Api,
            _ => trimmed
                .strip_prefix(TEMPLATE_PREFIX)
                .and_then(TemplateKind::from_slug)
                .map(Route::Template)
                .unwrap_or_else(|| Route::NotFound(path.to_string())),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Template(kind) => format!("{}{}", TEMPLATE_PREFIX, kind.slug()),
            Route::Settings => "/settings".to_string(),
            Route::Files => "/files".to_string(),
            Route::Api => "/api".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether this route has no page of its own.
    pub fn renders_not_found(&self) -> bool {
        matches!(
            self,
            Route::Settings | Route::Files | Route::Api | Route::NotFound(_)
        )
    }
}
