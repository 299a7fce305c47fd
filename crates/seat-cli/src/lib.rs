//! Library side of the `seatplan` command: logging setup and the
//! ingest / allocate / output stages the subcommands are built from.

pub mod logging;
pub mod pipeline;
