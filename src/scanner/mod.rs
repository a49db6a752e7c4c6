mod metadata;

pub use metadata::created_time;

use crate::error::{Result, ScanError};
use scan_folders_common::FileKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 検証対象の候補ファイル
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    /// 直上のフォルダ名（テンプレートフォルダ名と対応）
    pub folder_name: String,
    pub kind: FileKind,
    /// 作成日時（取得できなければNone）
    pub created: Option<String>,
}

impl CandidateFile {
    pub fn from_path(path: &Path) -> Option<Self> {
        let kind = FileKind::from_path(path)?;
        let file_name = path.file_name()?.to_string_lossy().to_string();
        let folder_name = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            folder_name,
            kind,
            created: created_time(path).ok(),
        })
    }
}

/// 受け入れフォルダを再帰的にスキャン
///
/// 処理開始前にすべての対象ファイルを収集する。パス順でソート。
pub fn scan_folder(folder: &Path) -> Result<Vec<CandidateFile>> {
    if !folder.is_dir() {
        return Err(ScanError::FolderNotFound(folder.display().to_string()));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        // シンボリックリンク先のファイルも対象（ディレクトリのリンクは辿らない）
        if !entry.path().is_file() {
            continue;
        }

        if let Some(candidate) = CandidateFile::from_path(entry.path()) {
            candidates.push(candidate);
        }
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(candidates)
}
