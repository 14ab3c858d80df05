use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// 遍历事件的观察者接口
///
/// 遍历器只负责发出事件，怎么展示由实现方决定，
/// 统计逻辑因此不依赖任何输出格式。
pub trait ScanObserver {
    /// 进入一个目录（参数是相对于项目根目录的路径）
    fn on_enter_directory(&self, relative_path: &Path);

    /// 成功统计一个文件（参数是已统计的文件总数）
    fn on_file_counted(&self, processed: u64);
}

/// 不展示任何内容的观察者，测试时使用
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_enter_directory(&self, _relative_path: &Path) {}

    fn on_file_counted(&self, _processed: u64) {}
}

/// 基于终端 spinner 的进度展示
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// 创建进度条（在测试时禁用）
    pub fn new() -> Self {
        let bar = if cfg!(test) {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] 已统计 {pos} 个文件 | {msg}")
                    .unwrap()
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        Self { bar }
    }

    /// 结束进度展示
    pub fn finish(&self) {
        self.bar.finish_with_message("分析完成");
    }
}

impl ScanObserver for ProgressReporter {
    fn on_enter_directory(&self, relative_path: &Path) {
        self.bar
            .set_message(format!("当前目录: {}", relative_path.display()));
    }

    fn on_file_counted(&self, processed: u64) {
        self.bar.set_position(processed);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
