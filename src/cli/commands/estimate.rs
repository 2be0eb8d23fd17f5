/// Variant estimation command - run the engine without the pipeline
use crate::cli::commands::{print_help, Command, Flag};
use crate::cli::{output::Output, CliContext};
use crate::config;
use crate::error::MungeError;
use crate::modules::munge::{MungeLevel, Mutator};

pub struct EstimateCommand;

impl Command for EstimateCommand {
    fn name(&self) -> &str {
        "estimate"
    }

    fn description(&self) -> &str {
        "Count variants for a seed word without generating a wordlist"
    }

    fn flags(&self) -> Vec<Flag> {
        vec![
            Flag::new("word", "Seed word to estimate").with_short('w'),
            Flag::new("level", "Munge level [1-3]")
                .with_short('l')
                .with_default("2"),
        ]
    }

    fn examples(&self) -> Vec<(&str, &str)> {
        vec![
            ("Estimate the default level", "munge estimate --word admin"),
            ("Estimate expert level", "munge estimate -w admin -l 3"),
        ]
    }

    fn execute(&self, ctx: &CliContext) -> Result<(), String> {
        let word = match ctx.flag_any(&["word", "w"]) {
            Some(word) => word,
            None => {
                print_help(self);
                return Err(MungeError::Config("nothing to do: provide --word".to_string())
                    .to_string());
            }
        };

        let level = match ctx.flag_any(&["level", "l"]) {
            Some(raw) => {
                let parsed: i64 = raw
                    .parse()
                    .map_err(|_| format!("Invalid --level value '{}'", raw))?;
                MungeLevel::from_raw(parsed)
            }
            None => MungeLevel::from_raw(config::get().level),
        };

        let variants = Mutator::mutate(word, level);

        Output::header(&format!("Estimate for '{}'", word));
        Output::item("Level", &level.to_string());
        Output::item("Raw", &Mutator::raw_variant_count(level).to_string());
        Output::item("Unique", &variants.len().to_string());

        Output::section("Preview (first 10 entries)");
        for (i, entry) in variants.iter().take(10).enumerate() {
            println!("  {}. {}", i + 1, entry);
        }
        if variants.len() > 10 {
            Output::dim(&format!("  ... and {} more", variants.len() - 10));
        }

        Ok(())
    }
}
