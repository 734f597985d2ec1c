//! Tool registry / 도구 목록
//!
//! The bundled catalog is compiled in from `catalog/tools.json`.
//! A different catalog file can be loaded with [`load`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::search::Searchable;

const BUILTIN_CATALOG: &str = include_str!("../catalog/tools.json");

static BUILTIN: Lazy<Vec<Tool>> = Lazy::new(|| match parse(BUILTIN_CATALOG) {
    Ok(tools) => {
        warn_duplicates(&tools);
        tools
    }
    Err(e) => {
        tracing::warn!("Bundled catalog is invalid, using empty catalog: {}", e);
        Vec::new()
    }
});

/// Tool entry / 도구 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool ID / 도구 ID
    pub id: String,
    /// Display name (Korean) / 표시 이름
    pub name: String,
    /// Short description / 설명
    #[serde(default)]
    pub description: String,
    /// Synonyms and related terms / 키워드
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    /// Page route / 페이지 경로
    #[serde(default)]
    pub route: String,
}

impl Tool {
    pub fn new(id: &str, name: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            icon: String::new(),
            category: String::new(),
            route: String::new(),
        }
    }
}

impl Searchable for Tool {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Bundled catalog, parsed once / 내장 도구 목록
pub fn builtin() -> &'static [Tool] {
    &BUILTIN
}

/// Parse a catalog from JSON / JSON에서 도구 목록 파싱
pub fn parse(json: &str) -> serde_json::Result<Vec<Tool>> {
    serde_json::from_str(json)
}

/// Load a catalog file / 도구 목록 파일 불러오기
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Tool>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tools = parse(&content).map_err(|source| Error::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;

    warn_duplicates(&tools);
    tracing::info!("Loaded {} tools from {:?}", tools.len(), path);
    Ok(tools)
}

/// Pick the catalog: explicit path, then `catalog.path` from config, then bundled / 도구 목록 결정
pub fn resolve(override_path: Option<&Path>, app_config: &AppConfig) -> Result<Vec<Tool>> {
    match override_path.map(Path::to_path_buf).or_else(|| app_config.catalog_path()) {
        Some(path) => load(path),
        None => Ok(builtin().to_vec()),
    }
}

/// Log duplicated IDs, returns how many entries repeat an earlier ID / 중복 ID 경고
///
/// Duplicates are kept, the search engine does not deduplicate.
pub fn warn_duplicates(tools: &[Tool]) -> usize {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = 0;
    for tool in tools {
        let count = seen.entry(tool.id.as_str()).or_default();
        *count += 1;
        if *count > 1 {
            duplicates += 1;
            tracing::warn!("Duplicate tool id in catalog: {}", tool.id);
        }
    }
    duplicates
}

/// Find tool by ID / ID로 도구 찾기
pub fn find<'a>(tools: &'a [Tool], id: &str) -> Option<&'a Tool> {
    tools.iter().find(|t| t.id == id)
}

/// Group tools by category, catalog order kept within a group / 카테고리별 분류
pub fn by_category(tools: &[Tool]) -> BTreeMap<&str, Vec<&Tool>> {
    let mut groups: BTreeMap<&str, Vec<&Tool>> = BTreeMap::new();
    for tool in tools {
        groups.entry(tool.category.as_str()).or_default().push(tool);
    }
    groups
}
