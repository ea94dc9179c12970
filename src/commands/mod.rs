pub mod analyze;
mod context;
pub mod init;
pub mod rules;

pub use analyze::{run_analyze, run_analyze_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_catalog, run_rules, run_rules_impl};
