// Re-export state types
pub mod state;
pub use state::{CpuStateTrait, Ls8State};

// The LS-8 core
pub mod ls8;
pub use ls8::Ls8;
