//! 検証まわりの型定義
//!
//! - FileKind: 対象ファイルの種別（CSV / Excel）
//! - ValidationResult: ヘッダー照合の結果
//! - LogEntry: スキャンログの1行

use crate::error::{Error, Result};
use crate::render::{py_list, py_sheet_map};
use serde::Serialize;
use std::path::Path;

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 区切りテキスト（.csv）
    DelimitedText,
    /// 複数シートのスプレッドシート（.xls / .xlsx）
    Spreadsheet,
}

impl FileKind {
    /// `.csv` / `.xls` / `.xlsx`（大文字小文字は区別しない）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::DelimitedText),
            "xls" | "xlsx" => Some(FileKind::Spreadsheet),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// 対象外の拡張子はエラー
    pub fn try_from_path(path: &Path) -> Result<Self> {
        Self::from_path(path)
            .ok_or_else(|| Error::UnsupportedFileType(path.display().to_string()))
    }
}

/// 検証ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Success,
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "Success"),
            Status::Error => write!(f, "Error"),
        }
    }
}

/// 1シート分のヘッダー（1行目）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetHeaders {
    pub name: String,
    pub headers: Vec<String>,
}

impl SheetHeaders {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
        }
    }
}

/// シート単位の列不一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetMismatch {
    pub sheet: String,
    pub columns: Vec<String>,
}

/// ヘッダー照合結果
///
/// 候補ファイルにあってテンプレートにない列・シートだけを保持する。
/// テンプレートにあって候補にない列は記録しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    DelimitedText {
        header_mismatch: Vec<String>,
    },
    Spreadsheet {
        /// 列不一致のあるシートのみ（候補ファイルのシート順）
        header_mismatch: Vec<SheetMismatch>,
        sheet_mismatch: Vec<String>,
    },
}

impl ValidationResult {
    pub fn kind(&self) -> FileKind {
        match self {
            ValidationResult::DelimitedText { .. } => FileKind::DelimitedText,
            ValidationResult::Spreadsheet { .. } => FileKind::Spreadsheet,
        }
    }

    pub fn status(&self) -> Status {
        let clean = match self {
            ValidationResult::DelimitedText { header_mismatch } => header_mismatch.is_empty(),
            ValidationResult::Spreadsheet {
                header_mismatch,
                sheet_mismatch,
            } => header_mismatch.is_empty() && sheet_mismatch.is_empty(),
        };
        if clean {
            Status::Success
        } else {
            Status::Error
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    /// 隔離メモ・ログに書く不一致メッセージ（成功時はNone）
    pub fn message(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(match self {
            ValidationResult::DelimitedText { header_mismatch } => {
                format!("Header Mismatch: {}", py_list(header_mismatch))
            }
            ValidationResult::Spreadsheet {
                header_mismatch,
                sheet_mismatch,
            } => format!(
                "Header Mismatch: {}; Sheet Mismatch: {}",
                py_sheet_map(header_mismatch),
                py_list(sheet_mismatch)
            ),
        })
    }

    pub fn error_text(&self) -> String {
        self.message().unwrap_or_default()
    }
}

/// スキャンログのエントリ
///
/// フィールド順がそのままレポートの列順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(rename = "Created Time")]
    pub created_time: String,
    #[serde(rename = "Scanned Time")]
    pub scanned_time: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Error")]
    pub error: String,
}

impl LogEntry {
    pub const FIELD_NAMES: [&'static str; 5] =
        ["File Name", "Created Time", "Scanned Time", "Status", "Error"];

    pub fn new(
        file_name: impl Into<String>,
        created_time: impl Into<String>,
        scanned_time: impl Into<String>,
        result: &ValidationResult,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            created_time: created_time.into(),
            scanned_time: scanned_time.into(),
            status: result.status(),
            error: result.error_text(),
        }
    }

    /// (フィールド名, 値) の組を列順で返す
    pub fn fields(&self) -> [(&'static str, String); 5] {
        let [name, created, scanned, status, error] = Self::FIELD_NAMES;
        [
            (name, self.file_name.clone()),
            (created, self.created_time.clone()),
            (scanned, self.scanned_time.clone()),
            (status, self.status.to_string()),
            (error, self.error.clone()),
        ]
    }
}
