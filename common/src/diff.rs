//! ヘッダー差分
//!
//! 照合は非対称: 候補側にしかない名前だけを不一致とする。
//! 比較は完全一致（大文字小文字を区別、順序は無視）。

use crate::types::{SheetHeaders, SheetMismatch, ValidationResult};
use std::collections::HashSet;

/// `reference` に存在しない `candidate` の名前を、初出順・重複なしで返す
pub fn extra_names<S: AsRef<str>>(candidate: &[S], reference: &[S]) -> Vec<String> {
    let known: HashSet<&str> = reference.iter().map(|s| s.as_ref()).collect();
    let mut seen = HashSet::new();
    candidate
        .iter()
        .map(|s| s.as_ref())
        .filter(|name| !known.contains(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// CSVのヘッダー行同士を照合
pub fn compare_delimited(candidate: &[String], template: &[String]) -> ValidationResult {
    ValidationResult::DelimitedText {
        header_mismatch: extra_names(candidate, template),
    }
}

/// ワークブック同士を照合
///
/// テンプレートにないシートはシート不一致として記録し、
/// 両方にあるシートは1行目を個別に照合する。
pub fn compare_workbooks(candidate: &[SheetHeaders], template: &[SheetHeaders]) -> ValidationResult {
    let candidate_names: Vec<&str> = candidate.iter().map(|s| s.name.as_str()).collect();
    let template_names: Vec<&str> = template.iter().map(|s| s.name.as_str()).collect();
    let sheet_mismatch = extra_names(&candidate_names, &template_names);

    let header_mismatch = candidate
        .iter()
        .filter_map(|sheet| {
            let reference = template.iter().find(|t| t.name == sheet.name)?;
            let columns = extra_names(&sheet.headers, &reference.headers);
            if columns.is_empty() {
                None
            } else {
                Some(SheetMismatch {
                    sheet: sheet.name.clone(),
                    columns,
                })
            }
        })
        .collect();

    ValidationResult::Spreadsheet {
        header_mismatch,
        sheet_mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_subset_header_is_clean() {
        let candidate = names(&["Amount", "Name"]);
        let template = names(&["Name", "Amount", "Date"]);
        let result = compare_delimited(&candidate, &template);
        assert_eq!(result.status(), Status::Success);
    }

    #[test]
    fn test_extra_columns_reported_exactly() {
        let candidate = names(&["Name", "Amount", "Extra", "Note"]);
        let template = names(&["Name", "Amount", "Date"]);
        let result = compare_delimited(&candidate, &template);
        assert_eq!(
            result,
            ValidationResult::DelimitedText {
                header_mismatch: names(&["Extra", "Note"])
            }
        );
    }

    #[test]
    fn test_missing_columns_never_reported() {
        let candidate = names(&["Name"]);
        let template = names(&["Name", "Amount", "Date"]);
        let result = compare_delimited(&candidate, &template);
        assert!(result.is_success());
    }

    #[test]
    fn test_case_sensitive_match() {
        let candidate = names(&["name"]);
        let template = names(&["Name"]);
        assert_eq!(extra_names(&candidate, &template), names(&["name"]));
    }

    #[test]
    fn test_duplicate_extra_reported_once() {
        let candidate = names(&["X", "Name", "X"]);
        let template = names(&["Name"]);
        assert_eq!(extra_names(&candidate, &template), names(&["X"]));
    }

    #[test]
    fn test_workbook_sheet_and_header_mismatch() {
        let candidate = vec![
            SheetHeaders::new("Jan", names(&["Name", "Bonus"])),
            SheetHeaders::new("Feb", names(&["Name"])),
        ];
        let template = vec![SheetHeaders::new("Jan", names(&["Name", "Amount"]))];

        let result = compare_workbooks(&candidate, &template);
        assert_eq!(
            result,
            ValidationResult::Spreadsheet {
                header_mismatch: vec![SheetMismatch {
                    sheet: "Jan".to_string(),
                    columns: names(&["Bonus"]),
                }],
                sheet_mismatch: names(&["Feb"]),
            }
        );
    }

    #[test]
    fn test_workbook_clean_sheets_omitted() {
        let candidate = vec![
            SheetHeaders::new("Jan", names(&["Name"])),
            SheetHeaders::new("Feb", names(&["Name", "Extra"])),
        ];
        let template = vec![
            SheetHeaders::new("Jan", names(&["Name", "Amount"])),
            SheetHeaders::new("Feb", names(&["Name"])),
            SheetHeaders::new("Mar", names(&["Name"])),
        ];

        match compare_workbooks(&candidate, &template) {
            ValidationResult::Spreadsheet {
                header_mismatch,
                sheet_mismatch,
            } => {
                assert!(sheet_mismatch.is_empty());
                assert_eq!(header_mismatch.len(), 1);
                assert_eq!(header_mismatch[0].sheet, "Feb");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
