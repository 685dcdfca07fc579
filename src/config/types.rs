//! Configuration type definitions.
//!
//! This module contains all the data structures used in docpress configuration files.
//! These types are pure data - no I/O or complex logic.
//!
//! Every field has a default, so an empty (or missing) config file yields the
//! stock DoeSangue documentation set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Root config
// =============================================================================

/// The full docpress configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    /// Markdown files to convert, in order, relative to the source directory
    #[serde(default = "default_documents", deserialize_with = "deserialize_documents")]
    pub documents: Vec<String>,
    /// Links shown in the navigation bar of every page
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLinkConfig>,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            documents: default_documents(),
            nav: default_nav(),
            markdown: MarkdownConfig::default(),
        }
    }
}

fn default_documents() -> Vec<String> {
    [
        "architecture.md",
        "DOCUMENTACAO-ENTIDADES.md",
        "DOADOR-CONTROLLER-DOCUMENTACAO.md",
        "PLANO-ACAO-SEMANAL.md",
        "ROADMAP-PROXIMOS-PASSOS.md",
        "SWAGGER-DOCUMENTACAO.md",
        "SWAGGER-RESUMO-IMPLEMENTACAO.md",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Accept a list, or a comma-separated string as given by an environment override.
fn deserialize_documents<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Documents {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Documents::deserialize(deserializer)? {
        Documents::List(list) => list,
        Documents::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
    })
}

// =============================================================================
// Site configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project name, shown in the `<title>` suffix and the footer
    #[serde(default = "default_name")]
    pub name: String,
    /// Line shown under the page heading in the header banner
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Value of the `<html lang>` attribute
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Documentation version printed in every page header
    #[serde(default = "default_version")]
    pub version: String,
    /// Title used when a document has no `# ` heading
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Title of the generated index page
    #[serde(default = "default_index_title")]
    pub index_title: String,
    /// chrono format string for the "generated at" timestamp
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Output directory, relative to the source directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Replacement page template, relative to the source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            subtitle: default_subtitle(),
            lang: default_lang(),
            version: default_version(),
            default_title: default_title(),
            index_title: default_index_title(),
            date_format: default_date_format(),
            output: default_output(),
            template: None,
        }
    }
}

fn default_name() -> String {
    "DoeSangue".to_string()
}

fn default_subtitle() -> String {
    "Sistema DoeSangue - Documentação Técnica".to_string()
}

fn default_lang() -> String {
    "pt-BR".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_title() -> String {
    "Documentação DoeSangue".to_string()
}

fn default_index_title() -> String {
    "Documentação Completa do Sistema DoeSangue".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y às %H:%M".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("html")
}

// =============================================================================
// Navigation
// =============================================================================

/// A single entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkConfig {
    pub title: String,
    pub url: String,
}

impl NavLinkConfig {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

fn default_nav() -> Vec<NavLinkConfig> {
    vec![
        NavLinkConfig::new("🏠 Início", "index.html"),
        NavLinkConfig::new("🏗️ Arquitetura", "architecture.html"),
        NavLinkConfig::new("📊 Entidades", "DOCUMENTACAO-ENTIDADES.html"),
        NavLinkConfig::new("🎮 Controller", "DOADOR-CONTROLLER-DOCUMENTACAO.html"),
        NavLinkConfig::new("📖 Swagger", "SWAGGER-DOCUMENTACAO.html"),
        NavLinkConfig::new("🗺️ Roadmap", "ROADMAP-PROXIMOS-PASSOS.html"),
    ]
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Enabled markdown extensions
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![
        "tables".to_string(),
        "fenced_code".to_string(),
        "toc".to_string(),
        "codehilite".to_string(),
    ]
}
