pub mod builder;

pub use builder::{Analysis, AnalysisOptions, analyze, analyze_conversations};
