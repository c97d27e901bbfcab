//! Client-side board state for the job tracker.
//!
//! The board controller owns the in-memory job cache, groups it into the
//! four status columns, and applies drag-and-drop events optimistically
//! against the job store, rolling back on failure. The store is an async
//! trait so the controller runs against HTTP in production and an
//! in-memory script in tests.

pub mod controller;
pub mod http;
pub mod store;

pub use controller::{BackendStatus, BoardController, Column, DropTarget, Notice};
pub use http::HttpJobStore;
pub use store::{JobStore, StoreError};
