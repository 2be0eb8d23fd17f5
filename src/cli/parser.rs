/// CLI Parser
///
/// Pattern: munge [command] [flags]
///
/// Commands: generate, estimate, version, help
///
/// Examples:
///   munge generate --word admin --level 2        # munge one word to stdout
///   munge generate -i seeds.txt -o wordlist.txt  # munge a file of seeds
///   munge estimate --word admin --level 3        # count without generating
use super::CliContext;

pub fn parse_args(args: &[String]) -> Result<CliContext, String> {
    if args.is_empty() {
        return Err("No command provided".to_string());
    }

    let mut ctx = CliContext::new();
    ctx.raw = args.to_vec();

    // Load YAML config from current directory if it exists
    ctx.config = crate::config::yaml::YamlConfig::load_from_cwd();

    let mut i = 0;
    let mut positionals: Vec<String> = Vec::new();

    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            positionals.extend_from_slice(&args[i + 1..]);
            break;
        }

        if arg.starts_with("--") {
            let flag_name = arg.trim_start_matches("--");

            if let Some(eq_pos) = flag_name.find('=') {
                let (key, value) = flag_name.split_at(eq_pos);
                ctx.flags.insert(key.to_string(), value[1..].to_string());
            } else if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                i += 1;
                ctx.flags.insert(flag_name.to_string(), args[i].clone());
            } else {
                ctx.flags.insert(flag_name.to_string(), "true".to_string());
            }
        } else if arg.starts_with('-') && arg.len() >= 2 {
            let flag_char = &arg[1..2];

            if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                i += 1;
                ctx.flags.insert(flag_char.to_string(), args[i].clone());
            } else {
                ctx.flags.insert(flag_char.to_string(), "true".to_string());
            }
        } else {
            positionals.push(arg.clone());
        }

        i += 1;
    }

    if !positionals.is_empty() {
        ctx.command = Some(positionals[0].clone());
        ctx.args = positionals[1..].to_vec();
    }

    Ok(ctx)
}
