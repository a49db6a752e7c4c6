//! テンプレート探索
//!
//! `<テンプレートルート>/<候補ファイルのフォルダ名>/` 内から、
//! ファイル名（拡張子なし・小文字）が候補パスに含まれるものを選ぶ。

use crate::error::{Result, ScanError};
use crate::scanner::CandidateFile;
use scan_folders_common::{select_template, FileKind};
use std::path::{Path, PathBuf};

/// 照合先のテンプレートファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub file_name: String,
    pub folder_name: String,
    pub kind: FileKind,
}

/// フォルダ内の対象テンプレート名一覧（ファイル名順）
pub fn list_templates(template_folder: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(template_folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if FileKind::from_path(&path).is_some() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// 候補ファイルに対応するテンプレートを探す
pub fn locate(candidate: &CandidateFile, template_root: &Path) -> Result<TemplateFile> {
    locate_in(&candidate.folder_name, &candidate.path, template_root)
}

pub fn locate_in(folder_name: &str, candidate_path: &Path, template_root: &Path) -> Result<TemplateFile> {
    let template_folder = template_root.join(folder_name);
    if !template_folder.is_dir() {
        return Err(ScanError::TemplateFolderMissing(
            template_folder.display().to_string(),
        ));
    }

    let names = list_templates(&template_folder)?;
    if names.is_empty() {
        return Err(ScanError::NoTemplateFiles(
            template_folder.display().to_string(),
        ));
    }

    let candidate_str = candidate_path.to_string_lossy();
    let file_name = select_template(&candidate_str, &names)
        .ok_or_else(|| ScanError::NoMatchingTemplate(candidate_path.display().to_string()))?;

    let path = template_folder.join(&file_name);
    let kind = FileKind::try_from_path(&path)?;

    Ok(TemplateFile {
        path,
        file_name,
        folder_name: folder_name.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(templates: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("sales");
        fs::create_dir_all(&folder).unwrap();
        for name in templates {
            fs::write(folder.join(name), "Name,Amount\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_template_folder_missing() {
        let dir = setup(&[]);
        let result = locate_in("widgets", Path::new("/in/widgets/data.csv"), dir.path());
        assert!(matches!(result, Err(ScanError::TemplateFolderMissing(_))));
    }

    #[test]
    fn test_no_template_files() {
        let dir = setup(&["readme.txt"]);
        let result = locate_in("sales", Path::new("/in/sales/report.csv"), dir.path());
        assert!(matches!(result, Err(ScanError::NoTemplateFiles(_))));
    }

    #[test]
    fn test_no_matching_template() {
        let dir = setup(&["inventory.csv"]);
        let result = locate_in("sales", Path::new("/in/sales/report.csv"), dir.path());
        assert!(matches!(result, Err(ScanError::NoMatchingTemplate(_))));
    }

    #[test]
    fn test_locate_match() {
        let dir = setup(&["inventory.csv", "Report.XLSX", "notes.txt"]);
        let found = locate_in("sales", Path::new("/in/sales/monthly_report_01.xlsx"), dir.path())
            .unwrap();
        assert_eq!(found.file_name, "Report.XLSX");
        assert_eq!(found.folder_name, "sales");
        assert_eq!(found.kind, FileKind::Spreadsheet);
        assert_eq!(found.path, dir.path().join("sales").join("Report.XLSX"));
    }

    #[test]
    fn test_locate_idempotent() {
        let dir = setup(&["report.csv", "report_daily.csv", "daily.csv"]);
        let path = Path::new("/in/sales/report_daily.csv");
        let first = locate_in("sales", path, dir.path()).unwrap();
        for _ in 0..3 {
            assert_eq!(locate_in("sales", path, dir.path()).unwrap(), first);
        }
        // ファイル名順で先勝ち
        assert_eq!(first.file_name, "daily.csv");
    }

    #[test]
    fn test_list_templates_sorted_and_filtered() {
        let dir = setup(&["b.csv", "a.xls", "c.json"]);
        fs::create_dir_all(dir.path().join("sales").join("nested.csv")).unwrap();
        let names = list_templates(&dir.path().join("sales")).unwrap();
        assert_eq!(names, vec!["a.xls", "b.csv"]);
    }
}
