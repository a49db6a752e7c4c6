//! テンプレート名の照合
//!
//! テンプレートファイル名から拡張子を除いて小文字化したものが、
//! 候補ファイルのパス（小文字化）に部分文字列として含まれていれば一致。

use std::path::Path;

/// 照合キー（拡張子を除いたファイル名の小文字）
pub fn template_key(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// 候補パスに一致するテンプレート名を返す
///
/// ディレクトリ列挙順に依存しないよう、ファイル名順で先勝ち。
pub fn select_template<S: AsRef<str>>(candidate_path: &str, template_names: &[S]) -> Option<String> {
    let haystack = candidate_path.to_lowercase();
    let mut sorted: Vec<&str> = template_names.iter().map(|s| s.as_ref()).collect();
    sorted.sort_unstable();

    sorted
        .into_iter()
        .find(|name| {
            let key = template_key(name);
            !key.is_empty() && haystack.contains(&key)
        })
        .map(str::to_string)
}
