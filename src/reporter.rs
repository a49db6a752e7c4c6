//! スキャンログの集計と出力
//!
//! 処理順にエントリを蓄積し、実行の最後に
//! `scan_<YYYYMMDD_HHMM>.txt` と `scan_<YYYYMMDD_HHMM>.csv` を書き出す。

use crate::error::{Result, ScanError};
use chrono::NaiveDateTime;
use scan_folders_common::{render_text_report, timestamp, LogEntry};
use std::path::{Path, PathBuf};

/// テンプレート未解決でスキップしたファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// 書き出したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub csv: PathBuf,
    pub skipped: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct RunReporter {
    entries: Vec<LogEntry>,
    skipped: Vec<SkippedFile>,
}

impl RunReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn record_skip(&mut self, path: &Path, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// レポートを書き出す
    ///
    /// スキップ一覧は先に書く（全件スキップでも残るように）。
    /// エントリが0件の場合はレポートを書かずに `EmptyRunSummary`。
    pub fn flush(&self, log_dir: &Path, at: &NaiveDateTime, write_skip_log: bool) -> Result<ReportPaths> {
        let skipped = if write_skip_log {
            self.write_skip_log(log_dir, at)?
        } else {
            None
        };

        if self.entries.is_empty() {
            return Err(ScanError::EmptyRunSummary);
        }

        let (txt_name, csv_name) = timestamp::scan_log_names(at);
        let text = log_dir.join(txt_name);
        let csv = log_dir.join(csv_name);

        std::fs::write(&text, render_text_report(&self.entries))?;

        // ヘッダー行は先頭エントリのフィールド名から生成される
        let mut writer = csv::Writer::from_path(&csv)?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        Ok(ReportPaths { text, csv, skipped })
    }

    /// `scan_<stamp>_skipped.txt`（スキップがなければ書かない）
    pub fn write_skip_log(&self, log_dir: &Path, at: &NaiveDateTime) -> Result<Option<PathBuf>> {
        if self.skipped.is_empty() {
            return Ok(None);
        }
        let path = log_dir.join(timestamp::skip_log_name(at));
        let body: String = self
            .skipped
            .iter()
            .map(|s| format!("{}: {}\n", s.path.display(), s.reason))
            .collect();
        std::fs::write(&path, body)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scan_folders_common::Status;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn entry(name: &str, status: Status, error: &str) -> LogEntry {
        LogEntry {
            file_name: name.to_string(),
            created_time: "2026-01-31 12:00:00".to_string(),
            scanned_time: "2026-02-01 08:30:00".to_string(),
            status,
            error: error.to_string(),
        }
    }

    #[test]
    fn test_flush_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = RunReporter::new();
        let result = reporter.flush(dir.path(), &at(), true);
        assert!(matches!(result, Err(ScanError::EmptyRunSummary)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_flush_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = RunReporter::new();
        reporter.record(entry("a.csv", Status::Success, ""));
        reporter.record(entry("b.csv", Status::Error, "Header Mismatch: ['X', 'Y']"));
        reporter.record(entry("c.xlsx", Status::Success, ""));

        let paths = reporter.flush(dir.path(), &at(), true).unwrap();
        assert_eq!(paths.text, dir.path().join("scan_20260201_0830.txt"));
        assert_eq!(paths.csv, dir.path().join("scan_20260201_0830.csv"));
        assert_eq!(paths.skipped, None);

        let csv_text = std::fs::read_to_string(&paths.csv).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "File Name,Created Time,Scanned Time,Status,Error");
        assert!(lines[2].starts_with("b.csv,"));
        assert!(lines[2].ends_with(",Error,\"Header Mismatch: ['X', 'Y']\""));

        let text = std::fs::read_to_string(&paths.text).unwrap();
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].starts_with("File Name: b.csv"));
    }

    #[test]
    fn test_csv_round_trips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = RunReporter::new();
        reporter.record(entry("a.csv", Status::Error, "Header Mismatch: {'Jan': ['X']}; Sheet Mismatch: []"));
        let paths = reporter.flush(dir.path(), &at(), false).unwrap();

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][4], "Header Mismatch: {'Jan': ['X']}; Sheet Mismatch: []");
    }

    #[test]
    fn test_all_skipped_still_writes_skip_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = RunReporter::new();
        reporter.record_skip(Path::new("/in/widgets/data.csv"), "Template folder not found - /t/widgets");

        let result = reporter.flush(dir.path(), &at(), true);
        assert!(matches!(result, Err(ScanError::EmptyRunSummary)));

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["scan_20260201_0830_skipped.txt"]);
    }

    #[test]
    fn test_skip_log_written_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = RunReporter::new();
        reporter.record(entry("a.csv", Status::Success, ""));
        reporter.record_skip(Path::new("/in/widgets/data.csv"), "Template folder not found - /t/widgets");

        let paths = reporter.flush(dir.path(), &at(), true).unwrap();
        let skipped = paths.skipped.expect("skip log missing");
        let body = std::fs::read_to_string(skipped).unwrap();
        assert_eq!(body, "/in/widgets/data.csv: Template folder not found - /t/widgets\n");

        let dir2 = tempfile::tempdir().unwrap();
        let paths = reporter.flush(dir2.path(), &at(), false).unwrap();
        assert_eq!(paths.skipped, None);
    }
}
