//! 検証結果に応じたファイル振り分け
//!
//! - 不一致: 隔離フォルダへ移動し、`<ファイル名>.txt` に理由を書く
//! - 一致: テンプレート名で本番フォルダへコピー、タイムスタンプ付きでアーカイブへコピー
//!
//! 移動は rename を試し、できなければ コピー → 検証 → 元ファイル削除 の順で行う。

use crate::error::{Result, ScanError};
use crate::locator::TemplateFile;
use crate::scanner::CandidateFile;
use chrono::Local;
use filetime::{set_file_mtime, FileTime};
use scan_folders_common::{timestamp, ValidationResult};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 振り分け先フォルダ
#[derive(Debug, Clone)]
pub struct Destinations {
    pub quarantine: PathBuf,
    pub prod: PathBuf,
    pub archive: PathBuf,
}

/// 振り分け結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    Quarantined { file: PathBuf, note: PathBuf },
    Published { prod: PathBuf, archive: PathBuf },
}

pub fn route(
    candidate: &CandidateFile,
    template: &TemplateFile,
    result: &ValidationResult,
    destinations: &Destinations,
) -> Result<RouteAction> {
    match result.message() {
        Some(message) => quarantine_file(&candidate.path, &destinations.quarantine, &message),
        None => copy_successful_file(
            &candidate.path,
            &template.file_name,
            &destinations.prod,
            &destinations.archive,
        ),
    }
}

/// 隔離フォルダへ移動し、理由を書いたメモを横に置く
pub fn quarantine_file(path: &Path, quarantine_dir: &Path, error_text: &str) -> Result<RouteAction> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ScanError::routing(path, "ファイル名を取得できません"))?;
    let target = quarantine_dir.join(file_name);
    let mut note_name = file_name.to_os_string();
    note_name.push(".txt");
    let note = quarantine_dir.join(note_name);

    // メモを先に書く。移動に失敗したらメモを消して元ファイルはそのまま
    std::fs::write(&note, error_text).map_err(|e| ScanError::routing(&note, e))?;
    if let Err(e) = safe_move(path, &target) {
        let _ = std::fs::remove_file(&note);
        return Err(e);
    }

    info!("隔離: {} -> {}", path.display(), target.display());
    Ok(RouteAction::Quarantined { file: target, note })
}

/// 本番・アーカイブへコピー（元ファイルは残す）
pub fn copy_successful_file(
    path: &Path,
    template_file_name: &str,
    prod_dir: &Path,
    archive_dir: &Path,
) -> Result<RouteAction> {
    let prod = prod_dir.join(template_file_name);
    let archive = archive_dir.join(timestamp::archive_file_name(
        template_file_name,
        &Local::now().naive_local(),
    ));

    copy_preserving_mtime(path, &prod)?;
    copy_preserving_mtime(path, &archive)?;

    info!("本番反映: {} -> {}", path.display(), prod.display());
    Ok(RouteAction::Published { prod, archive })
}

fn copy_preserving_mtime(from: &Path, to: &Path) -> Result<()> {
    std::fs::copy(from, to).map_err(|e| ScanError::routing(from, e))?;
    let meta = std::fs::metadata(from).map_err(|e| ScanError::routing(from, e))?;
    set_file_mtime(to, FileTime::from_last_modification_time(&meta))
        .map_err(|e| ScanError::routing(to, e))?;
    Ok(())
}

/// 失敗しても元ファイルを失わない移動
fn safe_move(from: &Path, to: &Path) -> Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    debug!("rename不可のためコピーで移動: {}", from.display());
    move_by_copy(from, to)
}

/// コピー → ハッシュ照合 → 元ファイル削除（ボリュームをまたぐ移動用）
fn move_by_copy(from: &Path, to: &Path) -> Result<()> {
    copy_preserving_mtime(from, to)?;
    finish_move(from, to)
}

/// 内容が一致すれば元ファイルを消す。不一致ならコピー先を消して元を残す
fn finish_move(from: &Path, to: &Path) -> Result<()> {
    let verified = file_digest(from)
        .and_then(|src| file_digest(to).map(|dst| src == dst))
        .map_err(|e| ScanError::routing(to, e))?;
    if !verified {
        let _ = std::fs::remove_file(to);
        return Err(ScanError::routing(from, "コピー先の内容が一致しません"));
    }

    std::fs::remove_file(from).map_err(|e| ScanError::routing(from, e))?;
    Ok(())
}

/// SHA-256（16進）
fn file_digest(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
