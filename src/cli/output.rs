/// Terminal output formatting
///
/// Status lines go to stdout with ANSI colors; `--no-color` (or the
/// config key) strips them. Generated variants never pass through here -
/// the sink owns wordlist output so stdout stays pipeline-clean.
use std::sync::atomic::{AtomicBool, Ordering};

static NO_COLOR: AtomicBool = AtomicBool::new(false);

pub struct Output;

impl Output {
    const RESET: &'static str = "\x1b[0m";
    const BOLD: &'static str = "\x1b[1m";
    const DIM: &'static str = "\x1b[2m";
    const RED: &'static str = "\x1b[31m";
    const GREEN: &'static str = "\x1b[32m";
    const YELLOW: &'static str = "\x1b[33m";
    const BLUE: &'static str = "\x1b[34m";

    pub fn disable_color() {
        NO_COLOR.store(true, Ordering::Relaxed);
    }

    fn paint(code: &'static str) -> &'static str {
        if NO_COLOR.load(Ordering::Relaxed) {
            ""
        } else {
            code
        }
    }

    pub fn success(msg: &str) {
        println!("{}✓{} {}", Self::paint(Self::GREEN), Self::paint(Self::RESET), msg);
    }

    pub fn error(msg: &str) {
        eprintln!("{}✗{} {}", Self::paint(Self::RED), Self::paint(Self::RESET), msg);
    }

    pub fn info(msg: &str) {
        println!("{}ℹ{} {}", Self::paint(Self::BLUE), Self::paint(Self::RESET), msg);
    }

    pub fn warning(msg: &str) {
        println!("{}⚠{} {}", Self::paint(Self::YELLOW), Self::paint(Self::RESET), msg);
    }

    pub fn header(title: &str) {
        println!("\n{}▸ {}{}", Self::paint(Self::BOLD), title, Self::paint(Self::RESET));
    }

    pub fn section(title: &str) {
        println!("{}{}{}", Self::paint(Self::BLUE), title, Self::paint(Self::RESET));
    }

    pub fn item(label: &str, value: &str) {
        println!(
            "  {}{:<12}{} {}",
            Self::paint(Self::DIM),
            label,
            Self::paint(Self::RESET),
            value
        );
    }

    pub fn dim(msg: &str) {
        println!("{}{}{}", Self::paint(Self::DIM), msg, Self::paint(Self::RESET));
    }
}
