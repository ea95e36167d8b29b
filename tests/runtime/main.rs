//! Integration tests for the runtime layer

mod files;
mod repl;
