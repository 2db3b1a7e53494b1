//! Shared, platform-neutral core of the tutorial-center admin front-end.
//!
//! Everything in here compiles both natively and for `wasm32`, so the list
//! view logic (filtering, sorting, status taxonomies, controller and modal
//! form state) can be tested without a browser. The `frontend` crate only
//! renders what these types decide.

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod markdown;
pub mod model;
pub mod taxonomy;
