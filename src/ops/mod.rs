//! High-level operations behind each command.
//!
//! These orchestrate the store, the weather lookup and the aggregation engine.
//! Rendering lives here too so `main` only decides where output goes.

pub mod export;
pub mod log;
pub mod review;

// Re-export commonly used functions
pub use export::{export_to_file, write_export};
pub use log::{log_entry, render_saved_entry, NewEntry};
pub use review::{
    calendar_for_output, custom_window, filter_entries, render_calendar, render_distribution,
    render_entry_list, render_summary, render_trends, render_window, trend_report, TrendReport,
};
