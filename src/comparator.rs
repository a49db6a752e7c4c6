//! ヘッダー照合（CSV / Excel）
//!
//! ファイルの読み込みだけをここで行い、差分は common 側で計算する。
//! 読めないファイルはその場で握りつぶさずエラーとして返す。

use crate::error::{Result, ScanError};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use scan_folders_common::{compare_delimited, compare_workbooks, FileKind, SheetHeaders, ValidationResult};
use std::path::Path;

/// 候補ファイルをテンプレートと照合
///
/// 種別は候補ファイルの拡張子で決める。
pub fn compare(candidate: &Path, template: &Path) -> Result<ValidationResult> {
    match FileKind::try_from_path(candidate)? {
        FileKind::DelimitedText => compare_csv_headers(candidate, template),
        FileKind::Spreadsheet => compare_excel_headers(candidate, template),
    }
}

pub fn compare_csv_headers(candidate: &Path, template: &Path) -> Result<ValidationResult> {
    let file_headers = read_csv_header(candidate)?;
    let template_headers = read_csv_header(template)?;
    Ok(compare_delimited(&file_headers, &template_headers))
}

pub fn compare_excel_headers(candidate: &Path, template: &Path) -> Result<ValidationResult> {
    let file_sheets = read_sheet_headers(candidate)?;
    let template_sheets = read_sheet_headers(template)?;
    Ok(compare_workbooks(&file_sheets, &template_sheets))
}

/// CSVの1行目
pub fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ScanError::header(path, e))?;

    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|e| ScanError::header(path, e))?;
            Ok(record.iter().map(|s| s.to_string()).collect())
        }
        None => Err(ScanError::header(path, "ヘッダー行がありません")),
    }
}

/// 全シートの1行目（シート順）
pub fn read_sheet_headers(path: &Path) -> Result<Vec<SheetHeaders>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ScanError::header(path, e))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ScanError::header(path, e))?;

        // 使用範囲が2行目以降から始まる場合、1行目は空
        let headers = match range.start() {
            Some((0, first_col)) => {
                let leading = std::iter::repeat(String::new()).take(first_col as usize);
                let cells = range
                    .rows()
                    .next()
                    .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
                    .unwrap_or_default();
                leading.chain(cells).collect()
            }
            _ => Vec::new(),
        };

        sheets.push(SheetHeaders::new(name, headers));
    }

    Ok(sheets)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
