//! Backend registry, resolution, and argument translation.

pub mod args;
pub mod registry;
pub mod resolve;

pub use args::build_args;
pub use registry::{BackendDescriptor, Registry};
pub use resolve::{Environment, ResolvedBackend, SystemEnv, resolve};
