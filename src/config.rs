use crate::error::{Result, ScanError};
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 受け入れフォルダ（再帰スキャン）
    pub source_path: PathBuf,
    /// テンプレートのルート（<root>/<フォルダ名>/）
    pub template_path: PathBuf,
    /// スキャンログ出力先
    pub log_path: PathBuf,
    pub quarantine_path: PathBuf,
    pub prod_path: PathBuf,
    pub archive_path: PathBuf,
    /// 試行回数（初回を含む）
    pub retry_count: u32,
    /// 再試行までの待ち時間（分）
    pub retry_wait_minutes: u64,
    /// スキップしたファイルの一覧を書き出す
    pub write_skip_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            template_path: PathBuf::new(),
            log_path: PathBuf::new(),
            quarantine_path: PathBuf::new(),
            prod_path: PathBuf::new(),
            archive_path: PathBuf::new(),
            retry_count: 2,
            retry_wait_minutes: 5,
            write_skip_log: true,
        }
    }
}

impl Config {
    /// 既定の設定ファイルを読み込む（なければデフォルト）
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("scan-folders").join("config.json"))
    }

    /// 6つのパスがすべて設定されているか
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = self
            .named_paths()
            .iter()
            .filter(|(_, path)| path.as_os_str().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ScanError::Config(format!(
                "パスが未設定です: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn named_paths(&self) -> [(&'static str, &Path); 6] {
        [
            ("source_path", self.source_path.as_path()),
            ("template_path", self.template_path.as_path()),
            ("log_path", self.log_path.as_path()),
            ("quarantine_path", self.quarantine_path.as_path()),
            ("prod_path", self.prod_path.as_path()),
            ("archive_path", self.archive_path.as_path()),
        ]
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_count, self.retry_wait_minutes)
    }
}
