pub mod report;

pub use report::{ExtensionStats, ProjectReport, NO_EXTENSION_KEY};
