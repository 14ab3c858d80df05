use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::models::{ProjectReport, NO_EXTENSION_KEY};
use crate::scanner::aggregator::{count_file_lines, ExtensionAggregator};
use crate::scanner::ignore_rules::IgnoreRules;
use crate::scanner::progress::ScanObserver;
use crate::scanner::text_detector::is_text_file;

/// 项目遍历器 - 走遍目录树，把可统计的文件交给聚合器
pub struct ProjectWalker {
    /// 项目根目录
    root: PathBuf,

    /// 忽略规则
    rules: IgnoreRules,

    /// 取消标志，Ctrl-C 处理线程置位后遍历提前结束
    cancel: Arc<AtomicBool>,
}

impl ProjectWalker {
    /// 创建新的遍历器
    pub fn new(root: PathBuf, rules: IgnoreRules, cancel: Arc<AtomicBool>) -> Self {
        Self {
            root,
            rules,
            cancel,
        }
    }

    /// 遍历整个项目并生成最终报告
    ///
    /// 单个文件的读取错误只记录警告，不会中断遍历。
    /// 收到取消信号时提前结束，已统计的部分仍然进入报告。
    pub fn run(&self, observer: &dyn ScanObserver) -> ProjectReport {
        let mut aggregator = ExtensionAggregator::new();
        let mut processed = 0u64;

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                // 根目录本身永远进入；被剪枝的目录不会展开
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.rules.should_prune_dir(entry.path())
            });

        for entry in walker {
            if self.cancel.load(Ordering::Relaxed) {
                tracing::warn!("收到中断信号，提前结束遍历，输出部分结果");
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("遍历目录时出错: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                observer.on_enter_directory(&self.relative_display_path(entry.path()));
                continue;
            }

            // 跳过符号链接等特殊条目
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.rules.should_skip_file(path) {
                continue;
            }

            if !is_text_file(path) {
                continue;
            }

            let byte_size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    tracing::warn!("读取文件元数据失败 {}: {}", path.display(), err);
                    continue;
                }
            };

            let line_count = match count_file_lines(path) {
                Ok(count) => count,
                Err(err) => {
                    tracing::warn!("读取文件失败 {}: {}", path.display(), err);
                    continue;
                }
            };

            let key = extension_key(&entry.file_name().to_string_lossy());
            aggregator.record(&key, line_count, byte_size);

            processed += 1;
            observer.on_file_counted(processed);
        }

        aggregator.into_report()
    }

    /// 进度展示用的相对路径；根目录本身显示目录名
    fn relative_display_path(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            _ => PathBuf::from(self.root.file_name().unwrap_or(self.root.as_os_str())),
        }
    }
}

/// 从文件名推导扩展名键
///
/// 取最后一个 '.' 之后的部分并转为小写（保留点号）。
/// 文件名开头的点不算分隔符，.gitignore 这类文件视为无扩展名。
pub fn extension_key(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(index) if !file_name[..index].bytes().all(|byte| byte == b'.') => {
            file_name[index..].to_lowercase()
        }
        _ => NO_EXTENSION_KEY.to_string(),
    }
}
