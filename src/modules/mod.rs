/// Core modules organized by category
// Word mutation engine and concurrent generation pipeline
pub mod munge;
