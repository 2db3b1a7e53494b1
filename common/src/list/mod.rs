//! List view logic shared by every records screen: filter predicate, sort
//! comparator, the list state that owns the collection, and the controller
//! that runs its backend round trips.

mod controller;
mod filter;
mod notice;
mod sort;
mod state;

pub use controller::{ListController, Request, Response};
pub use filter::{FilterState, matches};
pub use notice::{Notice, NoticeKind, Notifier, Op, SESSION_EXPIRED_MESSAGE, report};
pub use sort::{SortDirection, SortState, compare};
pub use state::{Action, ListState, RemovalConfirmed};
