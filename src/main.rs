use munge::{cli, config, utils::logger};

use cli::{commands, output::Output, parser};
use std::env;

fn main() {
    // Load configuration once at startup so downstream modules can access it.
    let cfg = config::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        commands::print_global_help();
        return;
    }

    let ctx = match parser::parse_args(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            Output::error(&e);
            std::process::exit(1);
        }
    };

    // Enable verbose logging if --verbose flag or config key is present
    if cfg.verbose || ctx.has_flag("verbose") || ctx.has_flag("v") {
        logger::enable_verbose();
    }

    if cfg.no_color || ctx.has_flag("no-color") {
        Output::disable_color();
    }

    if ctx.has_flag("version") {
        print_version();
        return;
    }

    if ctx.has_flag("h") || ctx.has_flag("help") {
        handle_help_flag(&ctx);
        return;
    }

    match ctx.command.as_deref() {
        Some("help") => {
            handle_help_command(&ctx);
            return;
        }
        Some("version") => {
            print_version();
            return;
        }
        _ => {}
    }

    if let Err(e) = commands::dispatch(&ctx) {
        Output::error(&e);
        std::process::exit(1);
    }
}

fn handle_help_flag(ctx: &cli::CliContext) {
    if let Some(name) = ctx.command.as_deref() {
        if let Some(command) = commands::command_for(name) {
            commands::print_help(&*command);
            return;
        }

        Output::error(&format!("Unknown command '{}'", name));
    }

    commands::print_global_help();
}

fn handle_help_command(ctx: &cli::CliContext) {
    if let Some(name) = ctx.args.first() {
        if let Some(command) = commands::command_for(name) {
            commands::print_help(&*command);
            return;
        }

        Output::error(&format!("Unknown command '{}'", name));
    }

    commands::print_global_help();
}

fn print_version() {
    println!("munge v{}", env!("CARGO_PKG_VERSION"));
}
