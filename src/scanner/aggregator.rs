use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::models::{ExtensionStats, ProjectReport};

/// 按扩展名累加统计数据的聚合器
///
/// 单写入方设计：遍历器是唯一的写入者，整个生命周期只存在于一次分析中。
#[derive(Debug, Default)]
pub struct ExtensionAggregator {
    stats: BTreeMap<String, ExtensionStats>,
}

impl ExtensionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个文件的行数和字节数
    pub fn record(&mut self, extension_key: &str, line_count: u64, byte_size: u64) {
        let entry = self.stats.entry(extension_key.to_string()).or_default();
        entry.total_lines += line_count;
        entry.total_files += 1;
        entry.total_bytes += byte_size;
    }

    /// 汇总成最终报告，并计算全项目总行数
    pub fn into_report(self) -> ProjectReport {
        let total_lines_overall = self.stats.values().map(|stats| stats.total_lines).sum();
        ProjectReport {
            counts_by_extension: self.stats,
            total_lines_overall,
        }
    }
}

/// 统计单个文件的行数
///
/// 按换行符计数；文件末尾没有换行符时，残余内容也算一行。空文件为零行。
/// 按块读取，不会把整个文件载入内存。
pub fn count_file_lines(path: &Path) -> io::Result<u64> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut lines = 0u64;
    let mut last_byte = None;

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }

        lines += chunk.iter().filter(|&&byte| byte == b'\n').count() as u64;
        last_byte = Some(chunk[chunk.len() - 1]);

        let consumed = chunk.len();
        reader.consume(consumed);
    }

    if matches!(last_byte, Some(byte) if byte != b'\n') {
        lines += 1;
    }

    Ok(lines)
}
