pub mod cli;
pub mod config;
pub mod error;
pub mod modules; // Mutation engine and concurrent munge pipeline
pub mod utils;
