use clap::Parser;
use scan_folders_rust::{cli, comparator, config, error, locator, logging, pipeline, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, ScanError};
use pipeline::ScanPipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Run { paths, retries, retry_wait, no_skip_log } => {
            paths.apply(&mut config);
            if let Some(n) = retries {
                config.retry_count = n;
            }
            if let Some(minutes) = retry_wait {
                config.retry_wait_minutes = minutes;
            }
            if no_skip_log {
                config.write_skip_log = false;
            }

            println!("📂 scan-folders - 受け入れファイル検証\n");
            println!("  受け入れ: {}", config.source_path.display());
            println!("  テンプレート: {}\n", config.template_path.display());

            let mut pipeline = ScanPipeline::new(config);
            let outcome = pipeline.run()?;

            println!("✔ 処理: {}件 (成功 {} / 不一致 {})",
                outcome.entries.len(),
                outcome.success_count(),
                outcome.error_count(),
            );
            println!("✔ スキップ: {}件", outcome.skipped_count());
            println!("✔ レポート: {}", outcome.report.text.display());
            println!("✔ レポート: {}", outcome.report.csv.display());
            if let Some(skipped) = &outcome.report.skipped {
                println!("✔ スキップ一覧: {}", skipped.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Check { file, templates } => {
            let template_root = templates.unwrap_or_else(|| config.template_path.clone());
            if template_root.as_os_str().is_empty() {
                return Err(ScanError::Config("テンプレートのルートが未設定です".into()));
            }

            let candidate = scanner::CandidateFile::from_path(&file).ok_or_else(|| {
                scan_folders_common::Error::UnsupportedFileType(file.display().to_string())
            })?;

            let template = locator::locate(&candidate, &template_root)?;
            println!("テンプレート: {}", template.path.display());

            let result = comparator::compare(&candidate.path, &template.path)?;
            match result.message() {
                None => println!("✔ Success"),
                Some(message) => println!("✘ Error: {}", message),
            }
        }

        Commands::Config { paths, show, init } => {
            paths.apply(&mut config);

            if init {
                let saved = match &cli.config {
                    Some(path) => {
                        config.save_to(path)?;
                        path.clone()
                    }
                    None => config.save()?,
                };
                println!("✔ 設定を保存しました: {}", saved.display());
            }

            if show || !init {
                println!("設定:");
                for (name, path) in config.named_paths() {
                    println!("  {}: {}", name, path.display());
                }
                println!("  試行回数: {}", config.retry_count);
                println!("  再試行待ち: {}分", config.retry_wait_minutes);
                println!("  スキップ一覧: {}", if config.write_skip_log { "出力する" } else { "出力しない" });
            }
        }
    }

    Ok(())
}
