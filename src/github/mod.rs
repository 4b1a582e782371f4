// GitHub REST access: token resolution, client construction, commit lookup.

pub mod auth;
pub mod client;
pub mod commits;

pub use commits::CommitSource;
