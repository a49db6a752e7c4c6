use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("Template folder not found - {0}")]
    TemplateFolderMissing(String),

    #[error("No template files found in {0}")]
    NoTemplateFiles(String),

    #[error("No matching template file found for {0}")]
    NoMatchingTemplate(String),

    #[error("ヘッダー読み込みエラー ({path}): {reason}")]
    HeaderComparison { path: String, reason: String },

    #[error("ファイル振り分けエラー ({path}): {reason}")]
    Routing { path: String, reason: String },

    #[error("レポート対象のログがありません")]
    EmptyRunSummary,

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Common(#[from] scan_folders_common::Error),
}

impl ScanError {
    /// ファイル単位でスキップしてよいエラー（テンプレート未解決）
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            ScanError::TemplateFolderMissing(_)
                | ScanError::NoTemplateFiles(_)
                | ScanError::NoMatchingTemplate(_)
        )
    }

    /// 再試行しても結果が変わらないものは除外
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ScanError::EmptyRunSummary | ScanError::Config(_))
    }

    pub fn header(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        ScanError::HeaderComparison {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn routing(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        ScanError::Routing {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
