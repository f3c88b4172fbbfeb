//! Scout engine: AI research client and storage plumbing.
mod engine;
mod parse;
mod research;
mod store;
mod types;

pub use engine::EngineHandle;
pub use parse::parse_research_payload;
pub use research::{HttpResearchProvider, ResearchProvider, ResearchSettings};
pub use store::{ensure_data_dir, FileStorage, StorageError, StoragePort};
pub use types::{
    EngineEvent, FailureKind, QueryId, ResearchError, ResearchOutcome, SourceRef, StockPick,
};
