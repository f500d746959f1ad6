pub mod adapters;
pub mod compiler;
pub mod domain;
pub mod error;
pub mod ports;
