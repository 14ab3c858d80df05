use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ProjectReport;

/// 把报告序列化成 JSON 并写入目标文件
pub fn write_report(report: &ProjectReport, destination: &Path) -> Result<()> {
    let json = render_report(report)?;
    fs::write(destination, json)
        .with_context(|| format!("无法写入报告文件: {}", destination.display()))?;
    Ok(())
}

/// 生成报告的 JSON 文本（写文件失败时也用于输出到终端）
pub fn render_report(report: &ProjectReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("序列化报告失败")
}
