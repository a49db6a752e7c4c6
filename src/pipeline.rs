//! スキャン実行
//!
//! 1. 受け入れフォルダを再帰スキャンして対象をすべて収集
//! 2. ファイルごとに テンプレート探索 → ヘッダー照合 → 振り分け → ログ記録
//! 3. 最後にレポートを書き出す
//!
//! 1〜3 をまとめて1回の実行とし、失敗時は全体を最初からやり直す。

use crate::comparator;
use crate::config::Config;
use crate::error::Result;
use crate::locator;
use crate::reporter::{ReportPaths, RunReporter, SkippedFile};
use crate::retry::RetryPolicy;
use crate::router::{self, Destinations, RouteAction};
use crate::scanner::{self, CandidateFile};
use chrono::Local;
use scan_folders_common::{timestamp, LogEntry, Status};
use tracing::{debug, info, warn};

/// 実行フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Discovering,
    ProcessingFiles,
    Reporting,
    Done,
    Failed,
}

/// 1回の実行結果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub entries: Vec<LogEntry>,
    pub skipped: Vec<SkippedFile>,
    pub report: ReportPaths,
    /// 成功までにかかった試行回数
    pub attempts: u32,
}

impl RunOutcome {
    pub fn success_count(&self) -> usize {
        self.count(Status::Success)
    }

    pub fn error_count(&self) -> usize {
        self.count(Status::Error)
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    fn count(&self, status: Status) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

pub struct ScanPipeline {
    config: Config,
    phase: RunPhase,
}

impl ScanPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            phase: RunPhase::Idle,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 再試行ポリシー付きで実行
    pub fn run(&mut self) -> Result<RunOutcome> {
        let policy = self.config.retry_policy();
        self.run_with(&policy)
    }

    pub fn run_with(&mut self, policy: &RetryPolicy) -> Result<RunOutcome> {
        if let Err(e) = self.config.validate() {
            self.set_phase(RunPhase::Failed);
            return Err(e);
        }

        let result = policy.run(|attempt| {
            if attempt > 1 {
                info!("再実行 {}/{}", attempt, policy.attempts());
            }
            self.run_once().map(|(entries, skipped, report)| RunOutcome {
                entries,
                skipped,
                report,
                attempts: attempt,
            })
        });

        if result.is_err() {
            self.set_phase(RunPhase::Failed);
        }
        result
    }

    /// 1回分の実行（再試行なし）
    fn run_once(&mut self) -> Result<(Vec<LogEntry>, Vec<SkippedFile>, ReportPaths)> {
        self.set_phase(RunPhase::Discovering);
        let files = scanner::scan_folder(&self.config.source_path)?;
        info!("{}件の対象ファイルを検出", files.len());

        self.set_phase(RunPhase::ProcessingFiles);
        let destinations = Destinations {
            quarantine: self.config.quarantine_path.clone(),
            prod: self.config.prod_path.clone(),
            archive: self.config.archive_path.clone(),
        };
        let mut reporter = RunReporter::new();
        for file in &files {
            self.process_file(file, &destinations, &mut reporter)?;
        }
        if !reporter.skipped().is_empty() {
            warn!("テンプレート未解決でスキップ: {}件", reporter.skipped().len());
        }

        self.set_phase(RunPhase::Reporting);
        let report = reporter.flush(
            &self.config.log_path,
            &Local::now().naive_local(),
            self.config.write_skip_log,
        )?;

        self.set_phase(RunPhase::Done);
        let skipped = reporter.skipped().to_vec();
        let entries = reporter.entries().to_vec();
        Ok((entries, skipped, report))
    }

    fn process_file(
        &self,
        file: &CandidateFile,
        destinations: &Destinations,
        reporter: &mut RunReporter,
    ) -> Result<()> {
        let template = match locator::locate(file, &self.config.template_path) {
            Ok(template) => template,
            Err(e) if e.is_skippable() => {
                warn!("Error: {}", e);
                reporter.record_skip(&file.path, e.to_string());
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!("{} -> テンプレート {}", file.path.display(), template.file_name);

        let result = comparator::compare(&file.path, &template.path)?;
        let scanned = timestamp::display(&Local::now().naive_local());
        let entry = LogEntry::new(
            file.file_name.clone(),
            file.created.clone().unwrap_or_default(),
            scanned,
            &result,
        );

        match router::route(file, &template, &result, destinations)? {
            RouteAction::Quarantined { file: target, .. } => {
                debug!("隔離先: {}", target.display());
            }
            RouteAction::Published { prod, archive } => {
                debug!("本番: {} / アーカイブ: {}", prod.display(), archive.display());
            }
        }

        reporter.record(entry);
        Ok(())
    }

    fn set_phase(&mut self, phase: RunPhase) {
        debug!("phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
