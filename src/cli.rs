use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "line-counter-cli")]
#[command(about = "一个按文件扩展名统计项目代码行数的 CLI 工具")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// 要分析的项目目录
    pub path: PathBuf,

    /// 统计报告的输出路径
    #[arg(short, long, default_value = "resultado_contagem.json")]
    pub output: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}
