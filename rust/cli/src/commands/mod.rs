//! Command handlers, one module per subcommand.
//!
//! Each handler takes its arguments plus injected output streams and
//! returns `Result<(), CliError>`; [`crate::run`] maps that to an exit code.

mod deal;
mod eval;
mod play;

pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
