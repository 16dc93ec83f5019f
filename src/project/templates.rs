//! Built-in SEO starter templates
//!
//! Each template ships as a JSON document embedded in the binary: marketing
//! copy (title, description, features, use cases) plus either a file tree or,
//! for templates without one, a list of file summaries. Documents are parsed
//! on first use and cached for the life of the process.

use super::tree::FileNode;
use crate::error::{Error, Result, ResultExt};
use log::{debug, warn};
use serde::Deserialize;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Template Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// The built-in templates, in side-menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    KeywordResearch,
    BacklinkAnalyzer,
    OnPageSeo,
    SerpAnalyzer,
    SchemaGenerator,
}

impl TemplateKind {
    pub fn all() -> [TemplateKind; 5] {
        [
            TemplateKind::KeywordResearch,
            TemplateKind::BacklinkAnalyzer,
            TemplateKind::OnPageSeo,
            TemplateKind::SerpAnalyzer,
            TemplateKind::SchemaGenerator,
        ]
    }

    /// URL segment under `/templates/`.
    pub fn slug(&self) -> &'static str {
        match self {
            TemplateKind::KeywordResearch => "keyword-research",
            TemplateKind::BacklinkAnalyzer => "backlink-analyzer",
            TemplateKind::OnPageSeo => "on-page-seo",
            TemplateKind::SerpAnalyzer => "serp-analyzer",
            TemplateKind::SchemaGenerator => "schema-generator",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.slug() == slug)
    }

    /// Name used in the side menu.
    pub fn menu_label(&self) -> &'static str {
        match self {
            TemplateKind::KeywordResearch => "Keyword Research Tool",
            TemplateKind::BacklinkAnalyzer => "Backlink Analyzer",
            TemplateKind::OnPageSeo => "On-Page SEO Checker",
            TemplateKind::SerpAnalyzer => "SERP Analyzer",
            TemplateKind::SchemaGenerator => "Schema Markup Generator",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            TemplateKind::KeywordResearch => {
                include_str!("../../assets/templates/keyword-research.json")
            }
            TemplateKind::BacklinkAnalyzer => {
                include_str!("../../assets/templates/backlink-analyzer.json")
            }
            TemplateKind::OnPageSeo => include_str!("../../assets/templates/on-page-seo.json"),
            TemplateKind::SerpAnalyzer => include_str!("../../assets/templates/serp-analyzer.json"),
            TemplateKind::SchemaGenerator => {
                include_str!("../../assets/templates/schema-generator.json")
            }
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Template Data
// ─────────────────────────────────────────────────────────────────────────────

/// A file summary card, used by templates that ship no file tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructureEntry {
    pub file: String,
    pub summary: String,
}

/// Everything a template page displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TemplateInfo {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileNode>,
    #[serde(default)]
    pub structure: Vec<StructureEntry>,
}

impl TemplateInfo {
    /// Whether the page shows a browsable file tree.
    pub fn has_file_tree(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Parse one embedded template document.
pub fn parse_template(kind: TemplateKind) -> Result<TemplateInfo> {
    serde_json::from_str(kind.source()).map_err(|source| Error::TemplateData {
        name: kind.slug().to_string(),
        source,
    })
}

/// Get a template, parsing it on first use.
///
/// A malformed document is logged and replaced by an empty template.
pub fn template(kind: TemplateKind) -> &'static TemplateInfo {
    static TEMPLATES: [OnceLock<TemplateInfo>; 5] = [
        OnceLock::new(),
        OnceLock::new(),
        OnceLock::new(),
        OnceLock::new(),
        OnceLock::new(),
    ];

    TEMPLATES[kind.index()].get_or_init(|| {
        debug!("Loading template data: {}", kind.slug());
        parse_template(kind).unwrap_or_warn_default(
            TemplateInfo {
                slug: kind.slug().to_string(),
                title: kind.menu_label().to_string(),
                ..TemplateInfo::default()
            },
            "Failed to load template",
        )
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Starter Project
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StarterProject {
    files: Vec<FileNode>,
}

/// The file tree shown next to the editor on the home page.
pub fn starter_project() -> &'static [FileNode] {
    static STARTER: OnceLock<Vec<FileNode>> = OnceLock::new();
    STARTER.get_or_init(|| {
        match serde_json::from_str::<StarterProject>(include_str!(
            "../../assets/starter_project.json"
        )) {
            Ok(project) => project.files,
            Err(e) => {
                warn!("Failed to load starter project: {}", e);
                Vec::new()
            }
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
