pub mod aggregator;
pub mod ignore_rules;
pub mod progress;
pub mod text_detector;
pub mod walker;

pub use aggregator::{count_file_lines, ExtensionAggregator};
pub use ignore_rules::IgnoreRules;
pub use progress::{NullObserver, ProgressReporter, ScanObserver};
pub use text_detector::is_text_file;
pub use walker::{extension_key, ProjectWalker};
