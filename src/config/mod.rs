pub mod catalog;
mod filesystem;
mod loader;
mod model;

pub use catalog::{CategoryId, Rule, RuleCatalog, RuleCategory, RulePatch, RuleSet, Severity};
pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    AnalysisConfig, AnalysisMode, CategoryPatch, Config, DEFAULT_EXCLUDE_DIRS,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, DebtWeights, MetricsConfig, QualityGateConfig,
    ScannerConfig,
};
