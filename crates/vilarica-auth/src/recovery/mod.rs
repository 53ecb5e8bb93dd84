//! Recovery-code generation.

pub mod generator;

pub use generator::CodeGenerator;
