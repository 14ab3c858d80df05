use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::IgnoreConfig;

/// 忽略规则 - 决定哪些目录和文件不参与统计
///
/// 两种模式二选一：项目根目录存在 .gitignore 时解析其中的规则，
/// 否则退回到固定的目录名/文件名列表。
pub enum IgnoreRules {
    /// 基于 .gitignore 的匹配器
    VcsMatcher {
        /// 编译后的 .gitignore 匹配器，绑定到项目根目录
        matcher: Gitignore,

        /// 目录名列表（.gitignore 一般不会声明 .git 这类目录，始终生效）
        directories: HashSet<String>,

        /// 文件名列表（锁文件等生成文件，始终生效）
        files: HashSet<String>,
    },

    /// 固定的回退规则
    StaticFallback {
        directories: HashSet<String>,
        files: HashSet<String>,
    },
}

impl IgnoreRules {
    /// 根据项目根目录初始化忽略规则
    ///
    /// .gitignore 解析失败时记录警告并退回固定规则，不会中断分析。
    pub fn load(root: &Path, config: &IgnoreConfig) -> Self {
        let gitignore_path = root.join(".gitignore");

        if gitignore_path.exists() {
            match Self::build_matcher(root, &gitignore_path) {
                Ok(matcher) => {
                    tracing::info!("找到 .gitignore 文件，使用其中的规则");
                    return Self::VcsMatcher {
                        matcher,
                        directories: config.directories.clone(),
                        files: config.files.clone(),
                    };
                }
                Err(err) => {
                    tracing::warn!("解析 .gitignore 失败，退回默认忽略规则: {}", err);
                }
            }
        } else {
            tracing::info!("未找到 .gitignore 文件，使用默认忽略规则");
        }

        Self::StaticFallback {
            directories: config.directories.clone(),
            files: config.files.clone(),
        }
    }

    fn build_matcher(root: &Path, gitignore_path: &Path) -> Result<Gitignore> {
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(gitignore_path) {
            return Err(err.into());
        }
        Ok(builder.build()?)
    }

    /// 检查目录是否应该被剪枝（被剪枝的目录不会进入）
    pub fn should_prune_dir(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        match self {
            Self::VcsMatcher {
                matcher,
                directories,
                ..
            } => {
                directories.contains(name)
                    || matcher.matched_path_or_any_parents(path, true).is_ignore()
            }
            Self::StaticFallback { directories, .. } => directories.contains(name),
        }
    }

    /// 检查文件是否应该被跳过
    pub fn should_skip_file(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        match self {
            Self::VcsMatcher { matcher, files, .. } => {
                files.contains(name)
                    || matcher
                        .matched_path_or_any_parents(path, false)
                        .is_ignore()
            }
            Self::StaticFallback { files, .. } => files.contains(name),
        }
    }
}
