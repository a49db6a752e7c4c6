use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scan-folders")]
#[command(about = "受け入れファイルをテンプレートで検証して振り分けるツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/scan-folders/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スキャン・検証・振り分け・レポート出力を実行
    Run {
        #[command(flatten)]
        paths: PathArgs,

        /// 試行回数（初回を含む）
        #[arg(long)]
        retries: Option<u32>,

        /// 再試行までの待ち時間（分）
        #[arg(long)]
        retry_wait: Option<u64>,

        /// スキップ一覧を書き出さない
        #[arg(long)]
        no_skip_log: bool,
    },

    /// 1ファイルだけ照合して結果を表示（移動・コピーはしない）
    Check {
        /// 候補ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// テンプレートのルートフォルダ
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// 設定を表示/保存
    Config {
        #[command(flatten)]
        paths: PathArgs,

        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 現在の設定（引数で上書きしたもの）を既定の場所に保存
        #[arg(long)]
        init: bool,
    },
}

/// 設定ファイルの値を上書きするパス
#[derive(Args, Debug, Default, Clone)]
pub struct PathArgs {
    /// 受け入れフォルダ
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// テンプレートのルートフォルダ
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// スキャンログ出力先
    #[arg(long)]
    pub logs: Option<PathBuf>,

    /// 隔離フォルダ
    #[arg(long)]
    pub quarantine: Option<PathBuf>,

    /// 本番フォルダ
    #[arg(long)]
    pub prod: Option<PathBuf>,

    /// アーカイブフォルダ
    #[arg(long)]
    pub archive: Option<PathBuf>,
}

impl PathArgs {
    pub fn apply(&self, config: &mut crate::config::Config) {
        let overrides = [
            (&self.source, &mut config.source_path),
            (&self.templates, &mut config.template_path),
            (&self.logs, &mut config.log_path),
            (&self.quarantine, &mut config.quarantine_path),
            (&self.prod, &mut config.prod_path),
            (&self.archive, &mut config.archive_path),
        ];
        for (value, target) in overrides {
            if let Some(path) = value {
                *target = path.clone();
            }
        }
    }
}
