//! ログ初期化
//!
//! 診断メッセージは tracing で stderr へ。進捗表示は println のまま。

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "scan_folders_rust=info";
const VERBOSE_LOG_FILTER: &str = "scan_folders_rust=debug";

pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // テストなどで二重初期化されても無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
