//! Command handlers. One module per subcommand.

pub mod completions;
pub mod make;
pub mod rules;
