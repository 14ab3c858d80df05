pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod scanner;

// 重新导出常用模块
pub use models::{ExtensionStats, ProjectReport};
pub use scanner::{ExtensionAggregator, IgnoreRules, ProjectWalker};
