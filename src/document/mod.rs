//! Document Module - identity, key containers, and the accessor contract

pub mod core_trait;
pub mod dynamic;
pub mod identity;
pub mod key_list;

// Re-export main types
pub use core_trait::*;
pub use dynamic::*;
pub use identity::*;
pub use key_list::*;
