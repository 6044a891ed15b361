pub mod cli;
pub mod composition;
pub mod config;
pub mod data;
pub mod script;
pub mod server;
pub mod simulation;
