use chrono::Local;
use env_logger::{Builder, Target};
use log::Level;
use std::env;
use std::io::Write;

/// Install the process-wide log sink.
///
/// A single sink on standard output, level `DEBUG` when verbose and
/// `INFO` otherwise, formatted as `<timestamp> <LEVEL>: <message>`.
/// Must be called exactly once, after argument parsing and before
/// dispatch; re-initialization is not supported.
pub fn init(verbose: bool) {
    let level = if verbose { Level::Debug } else { Level::Info };

    let mut builder = Builder::new();
    builder.filter(None, level.to_level_filter());
    builder.target(Target::Stdout);

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    builder.init();
}
