// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod event;
pub mod github;
pub mod inputs;
pub mod run;
pub mod types;
pub mod workflow;
