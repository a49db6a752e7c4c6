//! scan-folders
//!
//! 受け入れフォルダのCSV/Excelをフォルダごとのテンプレートと照合し、
//! 一致すれば本番・アーカイブへ、不一致なら隔離フォルダへ振り分ける。

pub mod cli;
pub mod comparator;
pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod pipeline;
pub mod reporter;
pub mod retry;
pub mod router;
pub mod scanner;
