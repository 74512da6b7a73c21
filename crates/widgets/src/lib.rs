//! Widget state machines shared by the frontend and the automation harness.
//!
//! The frontend renders these models with Leptos; the harness drives the same
//! models through a synthetic DOM. Keeping the state transitions here means
//! both sides agree on what a click or an Enter commit does.

pub mod dropdown;
pub mod format;
pub mod page;
pub mod table;

pub use dropdown::{Dropdown, DropdownConfig};
pub use format::format_sum;
pub use page::PageConfig;
pub use table::{AggregationTable, Row, RowSpec};
