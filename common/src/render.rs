//! レポート・メッセージの文字列化
//!
//! 不一致メッセージはリテラル表記（`['Extra']`, `{'Jan': ['X']}`）で出力する。
//! 既存の隔離メモと同じ書式を保つため。

use crate::types::{LogEntry, SheetMismatch};

/// 文字列をクォート付きリテラルにする
fn quote(value: &str) -> String {
    // 単引用符を含み二重引用符を含まない場合は二重引用符で囲む
    if value.contains('\'') && !value.contains('"') {
        return format!("\"{}\"", value.replace('\\', "\\\\"));
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// `['a', 'b']`
pub fn py_list<S: AsRef<str>>(items: &[S]) -> String {
    let inner: Vec<String> = items.iter().map(|s| quote(s.as_ref())).collect();
    format!("[{}]", inner.join(", "))
}

/// `{'Sheet': ['a'], ...}`
pub fn py_sheet_map(items: &[SheetMismatch]) -> String {
    let inner: Vec<String> = items
        .iter()
        .map(|m| format!("{}: {}", quote(&m.sheet), py_list(&m.columns)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

/// テキストレポート本文
///
/// エントリごとに `Key: Value` 行を並べ、空行で区切る。
pub fn render_text_report(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let lines: Vec<String> = entry
            .fields()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();
        out.push_str(&lines.join("\n"));
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn test_py_list() {
        assert_eq!(py_list::<&str>(&[]), "[]");
        assert_eq!(py_list(&["Extra"]), "['Extra']");
        assert_eq!(py_list(&["A", "B"]), "['A', 'B']");
    }

    #[test]
    fn test_py_list_quotes() {
        assert_eq!(py_list(&["it's"]), "[\"it's\"]");
        assert_eq!(py_list(&["a'\"b"]), "['a\\'\"b']");
    }

    #[test]
    fn test_py_sheet_map() {
        assert_eq!(py_sheet_map(&[]), "{}");
        let items = vec![
            SheetMismatch {
                sheet: "Jan".to_string(),
                columns: vec!["X".to_string()],
            },
            SheetMismatch {
                sheet: "Feb".to_string(),
                columns: vec!["Y".to_string(), "Z".to_string()],
            },
        ];
        assert_eq!(py_sheet_map(&items), "{'Jan': ['X'], 'Feb': ['Y', 'Z']}");
    }

    #[test]
    fn test_render_text_report() {
        let entries = vec![
            LogEntry {
                file_name: "a.csv".to_string(),
                created_time: "2026-01-01 09:00:00".to_string(),
                scanned_time: "2026-01-02 10:00:00".to_string(),
                status: Status::Success,
                error: String::new(),
            },
            LogEntry {
                file_name: "b.csv".to_string(),
                created_time: "2026-01-01 09:00:00".to_string(),
                scanned_time: "2026-01-02 10:00:00".to_string(),
                status: Status::Error,
                error: "Header Mismatch: ['X']".to_string(),
            },
        ];

        let text = render_text_report(&entries);
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("File Name: a.csv\n"));
        assert!(blocks[0].ends_with("Error: "));
        assert!(blocks[1].contains("Status: Error"));
        assert!(blocks[1].ends_with("Error: Header Mismatch: ['X']"));
    }
}
