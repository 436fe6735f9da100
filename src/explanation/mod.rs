//! Presentation helpers
//!
//! Consumers of `ScoringResult`: report formatters and the agronomist advice
//! prompt with its offline fallback. The scoring engine never calls into this
//! module.

pub mod advisor;
pub mod formatters;
pub mod types;

pub use advisor::{
    advise_or_fallback, build_advisor_prompt, fallback_advice, Advice, AdviceProvider,
    AdviceSource, OfflineAdvisor,
};
pub use formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
pub use types::{FarmReport, ReportRow};
