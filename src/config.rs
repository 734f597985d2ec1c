//! Application configuration module / 애플리케이션 설정 모듈
//!
//! Manages configuration loaded from config.json
//! Creates default config file on first run / 첫 실행 시 기본 설정 파일 생성

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Default config file name / 기본 설정 파일 이름
pub const CONFIG_FILE: &str = "config.json";

/// Global configuration instance / 전역 설정 인스턴스
static CONFIG: OnceCell<Arc<RwLock<AppConfig>>> = OnceCell::new();

/// Application configuration / 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Request log database / 요청 기록 데이터베이스
    pub database: DatabaseConfig,
    /// Tool catalog source / 도구 목록
    pub catalog: CatalogConfig,
    /// Logging / 로그
    pub log: LogConfig,
}

/// Database configuration / 데이터베이스 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Data directory path / 데이터 디렉터리
    pub data_dir: String,
    /// Feature request database file (relative to data_dir) / 기능 요청 DB 파일
    pub db_file: String,
}

/// Catalog configuration / 도구 목록 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog JSON path, empty means the bundled catalog / 비어 있으면 내장 목록 사용
    pub path: String,
}

/// Logging configuration / 로그 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by RUST_LOG / 로그 필터
    pub filter: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            db_file: "requests.db".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "mwodeora=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the data directory path / 데이터 디렉터리 경로
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.database.data_dir)
    }

    /// Get the feature request database path / 기능 요청 DB 경로
    pub fn request_db_path(&self) -> PathBuf {
        self.data_dir().join(&self.database.db_file)
    }

    /// Catalog file, `None` for the bundled catalog / 도구 목록 파일 경로
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

/// Get the default config file path / 기본 설정 파일 경로
pub fn default_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE)
}

/// Load configuration from a file, or create it with defaults / 설정 파일 로드, 없으면 기본값으로 생성
pub fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Load config.json from the working directory / 작업 디렉터리의 config.json 로드
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&default_config_path())
}

/// Save configuration to a file / 설정 저장
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(config_path, content)
        .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

    Ok(())
}

/// Initialize global configuration / 전역 설정 초기화
pub fn init_config(config_path: Option<&Path>) -> Result<Arc<RwLock<AppConfig>>> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let config_arc = Arc::new(RwLock::new(config));

    CONFIG
        .set(config_arc.clone())
        .map_err(|_| Error::Config("Config already initialized".to_string()))?;

    Ok(config_arc)
}

/// Get global configuration instance / 전역 설정 인스턴스
pub fn get_config() -> Arc<RwLock<AppConfig>> {
    CONFIG
        .get_or_init(|| {
            let config = load_config().unwrap_or_default();
            Arc::new(RwLock::new(config))
        })
        .clone()
}

/// Get a read-only snapshot of current config / 현재 설정 스냅숏
pub fn config() -> AppConfig {
    get_config().read().clone()
}
