use clap::Parser;
use sparrow_cli::cli::args::Cli;
use sparrow_cli::cli::dispatch::handle;
use sparrow_cli::context::AppContext;
use sparrow_cli::engine::PlatformEngine;
use sparrow_cli::logger;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::from_cli(&cli);
    logger::init(cli.effective_verbose());
    let mut engine = PlatformEngine::new();
    handle(cli, &ctx, &mut engine);
}
