//! Automation boundary for the widget page.
//!
//! Renders the widget state machines from the `widgets` crate into a
//! synthetic DOM, resolves page-contract selectors against it with strict
//! uniqueness semantics, and manages the static asset server for end-to-end
//! checks. A query that claims to address exactly one element fails fast on
//! multiplicity; it never silently picks the first match.

pub mod dom;
pub mod error;
pub mod page;
pub mod selector;
pub mod server;

pub use error::{HarnessError, HarnessResult};
pub use page::Page;
pub use selector::Selector;
pub use server::{wait_for_ready, StaticServer};
