//! Domain logic shared by the Encore backend crates.
//!
//! Pure types and functions only: no database access, no HTTP. The `db`
//! crate maps these onto Postgres rows and the `api` crate onto handlers.

pub mod directory;
pub mod drinks;
pub mod error;
pub mod pagination;
pub mod permissions;
pub mod trivia;
pub mod types;
