//! 日時書式

use chrono::NaiveDateTime;

/// ファイル名用（分単位）
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// ログ表示用
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn stamp(at: &NaiveDateTime) -> String {
    at.format(STAMP_FORMAT).to_string()
}

pub fn display(at: &NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// アーカイブ先のファイル名: `<テンプレート名>_<YYYYMMDD_HHMM>`
pub fn archive_file_name(template_file_name: &str, at: &NaiveDateTime) -> String {
    format!("{}_{}", template_file_name, stamp(at))
}

/// スキャンログのファイル名（txt, csv）
pub fn scan_log_names(at: &NaiveDateTime) -> (String, String) {
    let stamp = stamp(at);
    (format!("scan_{}.txt", stamp), format!("scan_{}.csv", stamp))
}

/// スキップ一覧のファイル名
pub fn skip_log_name(at: &NaiveDateTime) -> String {
    format!("scan_{}_skipped.txt", stamp(at))
}
