pub mod bands;
mod traits;

pub use traits::ModuleExecutor;
