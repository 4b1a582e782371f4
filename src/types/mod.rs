// Records produced once per run and handed to the sync transport.

pub mod descriptor;
pub mod job;

pub use descriptor::*;
pub use job::*;
