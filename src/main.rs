use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use line_counter_cli::cli::Cli;
use line_counter_cli::config::Config;
use line_counter_cli::output::{render_report, write_report};
use line_counter_cli::scanner::{IgnoreRules, ProgressReporter, ProjectWalker};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // 根目录必须存在且是目录，否则不产生任何报告
    if !cli.path.is_dir() {
        eprintln!("错误: 路径 '{}' 不是有效的目录", cli.path.display());
        process::exit(2);
    }

    // 加载配置
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_file(config_path)?
    } else {
        Config::default()
    };

    // Ctrl-C 时停止遍历，已统计的部分结果仍然写入报告
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            cancel.store(true, Ordering::Relaxed);
        })?;
    }

    let rules = IgnoreRules::load(&cli.path, &config.ignore);
    let walker = ProjectWalker::new(cli.path.clone(), rules, cancel);
    let progress = ProgressReporter::new();

    let start = Instant::now();
    let report = walker.run(&progress);
    let elapsed = start.elapsed();

    progress.finish();

    println!("\n分析完成，耗时 {:.2} 秒。", elapsed.as_secs_f64());
    println!("共统计 {} 个文件。", report.total_files());

    // 写报告失败时不中断进程，把结果打印到终端作为兜底
    match write_report(&report, &cli.output) {
        Ok(()) => println!("结果已保存到: {}", cli.output.display()),
        Err(err) => {
            tracing::error!("{:#}", err);
            println!("{}", render_report(&report)?);
        }
    }

    Ok(())
}
