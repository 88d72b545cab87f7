//! Domain layer - Tag labels, collections and their history

pub mod collection;
pub mod history;
pub mod label;
pub mod manager;
pub mod registry;

pub use collection::TagCollection;
pub use history::{HistoryState, Snapshot, TagHistory};
pub use label::{Label, MARKER};
pub use manager::TagManager;
pub use registry::{KnownLabels, LabelRegistry};
