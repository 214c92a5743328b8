pub mod chart_view;
pub mod commands;
pub mod output;
pub mod table;

pub use commands::run_cli;
