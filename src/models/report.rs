use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 无扩展名文件在报告中使用的键
pub const NO_EXTENSION_KEY: &str = "no_extension";

/// 单个扩展名的统计数据
///
/// 序列化字段名沿用旧版报告格式，保证已有的报告消费方不需要改动。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionStats {
    /// 总行数
    #[serde(rename = "total_linhas")]
    pub total_lines: u64,

    /// 文件数量
    #[serde(rename = "total_arquivos")]
    pub total_files: u64,

    /// 磁盘字节总数
    #[serde(rename = "total_bytes")]
    pub total_bytes: u64,
}

/// 完整的分析报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    /// 按扩展名分组的统计（BTreeMap 保证输出顺序稳定）
    #[serde(rename = "contagem_por_extensao")]
    pub counts_by_extension: BTreeMap<String, ExtensionStats>,

    /// 所有扩展名的行数之和
    #[serde(rename = "total_geral_linhas_do_projeto")]
    pub total_lines_overall: u64,
}

impl ProjectReport {
    /// 已统计的文件总数
    pub fn total_files(&self) -> u64 {
        self.counts_by_extension
            .values()
            .map(|stats| stats.total_files)
            .sum()
    }
}
