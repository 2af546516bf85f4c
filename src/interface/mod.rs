pub mod cli;
pub mod mcp;
pub mod render;
pub mod shell;
