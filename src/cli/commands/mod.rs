pub mod estimate;
pub mod generate;

use crate::cli::{output::Output, CliContext};

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn flags(&self) -> Vec<Flag> {
        vec![]
    }
    fn examples(&self) -> Vec<(&str, &str)>;
    fn execute(&self, ctx: &CliContext) -> Result<(), String>;
}

#[derive(Clone)]
pub struct Flag {
    pub short: Option<char>,
    pub long: String,
    pub description: String,
    pub default: Option<String>,
}

impl Flag {
    pub fn new(long: &str, desc: &str) -> Self {
        Self {
            short: None,
            long: long.to_string(),
            description: desc.to_string(),
            default: None,
        }
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

pub fn all_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(generate::GenerateCommand),
        Box::new(estimate::EstimateCommand),
    ]
}

pub fn command_for(name: &str) -> Option<Box<dyn Command>> {
    all_commands().into_iter().find(|cmd| cmd.name() == name)
}

pub fn dispatch(ctx: &CliContext) -> Result<(), String> {
    let name = ctx
        .command
        .as_deref()
        .ok_or_else(|| "Missing command. Syntax: munge <command> [flags]".to_string())?;

    match command_for(name) {
        Some(command) => command.execute(ctx),
        None => Err(format!(
            "Unknown command '{}'. Use `munge help` to list available commands.",
            name
        )),
    }
}

pub fn print_help(cmd: &dyn Command) {
    Output::header(&format!("munge {} - {}", cmd.name(), cmd.description()));

    println!("\n{}USAGE:{}", "\x1b[1m", "\x1b[0m");
    println!("  munge {} [FLAGS]", cmd.name());

    let flags = cmd.flags();
    if !flags.is_empty() {
        println!("\n{}FLAGS:{}", "\x1b[1m", "\x1b[0m");
        for flag in &flags {
            let spelling = match flag.short {
                Some(short) => format!("-{}, --{}", short, flag.long),
                None => format!("    --{}", flag.long),
            };
            let default = flag
                .default
                .as_ref()
                .map(|d| format!(" (default: {})", d))
                .unwrap_or_default();
            println!("  {:<18} {}{}", spelling, flag.description, default);
        }
    }

    let examples = cmd.examples();
    if !examples.is_empty() {
        println!("\n{}EXAMPLES:{}", "\x1b[1m", "\x1b[0m");
        for (summary, invocation) in &examples {
            println!("  # {}", summary);
            println!("  {}", invocation);
        }
    }
    println!();
}

pub fn print_global_help() {
    Output::header("munge - dirty little word munger");
    println!("\nGenerates password-mutation wordlists from seed words:");
    println!("case variants, leetspeak substitution and common postfixes.");

    println!("\n{}USAGE:{}", "\x1b[1m", "\x1b[0m");
    println!("  munge <command> [FLAGS]");

    println!("\n{}COMMANDS:{}", "\x1b[1m", "\x1b[0m");
    for command in all_commands() {
        println!("  {:<12} {}", command.name(), command.description());
    }
    println!("  {:<12} {}", "version", "Print version information");
    println!("  {:<12} {}", "help", "Show this help");

    println!("\n{}GLOBAL FLAGS:{}", "\x1b[1m", "\x1b[0m");
    println!("  {:<12} {}", "--verbose", "Enable debug logging");
    println!("  {:<12} {}", "--no-color", "Disable ANSI colors");

    println!("\nUse `munge <command> --help` for command details.");
    println!();
}
