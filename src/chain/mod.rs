//! Linear management-chain resolver

pub mod resolver;

// Re-export main types
pub use resolver::{build_chain, resolve_chain, ChainEntry, ChainLevel, ChainResolution};
