//! Static page sections rendered server-side.

pub mod chart_panel;
pub mod summary_panel;
pub mod tree_panel;

pub use chart_panel::chart_panel;
pub use summary_panel::summary_panel;
pub use tree_panel::tree_panel;
