/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;

pub use args::{Cli, Commands, InvokeArgs, ListArgs, TargetArgs};
pub use commands::{
    handle_command, invoke, list, render_function_table, resolve_target, show_version,
    to_invocation, CommandContext,
};
