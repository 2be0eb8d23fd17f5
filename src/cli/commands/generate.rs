/// Wordlist generation command - the pipeline front-end
use std::time::Instant;

use crate::cli::commands::{print_help, Command, Flag};
use crate::cli::{output::Output, CliContext};
use crate::config;
use crate::error::MungeError;
use crate::modules::munge::{pipeline, MungeLevel, ResultSink, SeedSource};

pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn name(&self) -> &str {
        "generate"
    }

    fn description(&self) -> &str {
        "Generate a mutation wordlist from a seed word or seed file"
    }

    fn flags(&self) -> Vec<Flag> {
        vec![
            Flag::new("word", "Seed word to munge").with_short('w'),
            Flag::new("input", "Input file, one seed per line").with_short('i'),
            Flag::new("output", "Output file (stdout when omitted)").with_short('o'),
            Flag::new("level", "Munge level [1-3]")
                .with_short('l')
                .with_default("2"),
            Flag::new("threads", "Worker pool size").with_default("CPU count"),
        ]
    }

    fn examples(&self) -> Vec<(&str, &str)> {
        vec![
            ("Munge one word to stdout", "munge generate --word admin"),
            (
                "Expert level with output file",
                "munge generate -w admin -l 3 -o wordlist.txt",
            ),
            (
                "Munge a file of seeds across all CPUs",
                "munge generate -i seeds.txt -o wordlist.txt",
            ),
            (
                "Pin the worker pool size",
                "munge generate -i seeds.txt -o out.txt --threads 4",
            ),
        ]
    }

    fn execute(&self, ctx: &CliContext) -> Result<(), String> {
        let cfg = config::get();

        let word = ctx.flag_any(&["word", "w"]);
        let input = ctx.flag_any(&["input", "i"]);

        // Exactly one seed source is meaningful per run; a literal word
        // wins when both are given.
        if word.is_none() && input.is_none() {
            print_help(self);
            return Err(
                MungeError::Config("nothing to do: provide --word or --input".to_string())
                    .to_string(),
            );
        }

        let level = match ctx.flag_any(&["level", "l"]) {
            Some(raw) => {
                let parsed: i64 = raw
                    .parse()
                    .map_err(|_| format!("Invalid --level value '{}'", raw))?;
                MungeLevel::from_raw(parsed)
            }
            None => MungeLevel::from_raw(cfg.level),
        };

        let workers = match ctx.get_flag("threads") {
            Some(raw) => {
                let parsed: usize = raw
                    .parse()
                    .map_err(|_| format!("Invalid --threads value '{}'", raw))?;
                if parsed == 0 {
                    return Err("--threads must be at least 1".to_string());
                }
                parsed
            }
            None => cfg.worker_count(),
        };

        let output = ctx
            .flag_any(&["output", "o"])
            .cloned()
            .or_else(|| cfg.output_file.clone());

        let mut sink = match &output {
            Some(path) => ResultSink::file(path).map_err(|e| e.to_string())?,
            None => ResultSink::console(),
        };

        let started = Instant::now();

        // Single-word mode runs the degenerate one-producer pipeline.
        let workers = if word.is_some() { 1 } else { workers };

        let stats = if let Some(word) = word {
            crate::debug!("munging literal word at level {}", level);
            pipeline::run_word(word, level, &mut sink).map_err(|e| e.to_string())?
        } else {
            // Guard above ensures input is present when word is not.
            let path = input.ok_or("missing --input")?;
            let source = SeedSource::from_file(path).map_err(|e| e.to_string())?;
            pipeline::run_stream(source, level, workers, &mut sink).map_err(|e| e.to_string())?
        };

        // Console mode keeps stdout a clean wordlist; summary only when
        // results went to a file.
        if let Some(path) = &output {
            Output::success(&format!("Wordlist written to {}", path));
            Output::item("Seeds", &stats.seeds.to_string());
            Output::item("Variants", &stats.variants.to_string());
            Output::item("Level", &level.to_string());
            Output::item("Workers", &workers.to_string());
            Output::item("Elapsed", &format!("{:.2?}", started.elapsed()));
        } else {
            crate::debug!(
                "{} seeds -> {} variants in {:.2?}",
                stats.seeds,
                stats.variants,
                started.elapsed()
            );
        }

        Ok(())
    }
}
