use std::collections::HashSet;

pub struct DefaultConfig;

impl DefaultConfig {
    /// 默认忽略的目录名（项目没有 .gitignore 时的回退规则）
    pub fn default_ignore_dirs() -> HashSet<String> {
        let mut dirs = HashSet::new();

        // 版本控制
        dirs.insert(".git".to_string());

        // 常见的依赖目录
        dirs.insert("node_modules".to_string());
        dirs.insert("vendor".to_string());

        // IDE 和编辑器
        dirs.insert(".vscode".to_string());
        dirs.insert(".idea".to_string());

        // 构建产物和缓存
        dirs.insert("__pycache__".to_string());
        dirs.insert("dist".to_string());
        dirs.insert("build".to_string());

        dirs
    }

    /// 默认忽略的文件名（自动生成的锁文件，任何模式下都生效）
    pub fn default_ignore_files() -> HashSet<String> {
        let mut files = HashSet::new();

        files.insert("package-lock.json".to_string());
        files.insert("composer.lock".to_string());

        files
    }
}
