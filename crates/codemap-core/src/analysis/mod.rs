//! Analysis modules — post-scan algorithms over the tree and statistics.

pub mod extensions;
pub mod search;

pub use extensions::{rank_extensions, top_extensions, ExtensionShare, DEFAULT_TOP_EXTENSIONS};
pub use search::{filter_tree, FilterOutcome, RowState};
