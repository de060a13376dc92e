pub mod hash;
pub mod png;
