use chrono::{DateTime, Local};
use scan_folders_common::timestamp;
use std::path::Path;

/// 作成日時を表示用文字列で取得
///
/// 作成日時を持たないファイルシステムでは更新日時で代用する。
pub fn created_time(path: &Path) -> std::io::Result<String> {
    let meta = std::fs::metadata(path)?;
    let time = meta.created().or_else(|_| meta.modified())?;
    let local: DateTime<Local> = time.into();
    Ok(timestamp::display(&local.naive_local()))
}
