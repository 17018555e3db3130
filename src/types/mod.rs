// Markshelf shared type definitions
// Each submodule defines types used across the library, the managers and the RPC layer.

pub mod ai;
pub mod bookmark;
pub mod errors;
pub mod notice;
pub mod settings;
