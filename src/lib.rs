pub mod arith;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;
