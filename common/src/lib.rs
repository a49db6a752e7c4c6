//! scan-folders Common Library
//!
//! CLIから利用される、ファイルシステムに依存しない型とロジック

pub mod types;
pub mod error;
pub mod diff;
pub mod matcher;
pub mod render;
pub mod timestamp;

pub use types::{FileKind, LogEntry, SheetHeaders, SheetMismatch, Status, ValidationResult};
pub use error::{Error, Result};
pub use diff::{compare_delimited, compare_workbooks, extra_names};
pub use matcher::{select_template, template_key};
pub use render::{py_list, py_sheet_map, render_text_report};
