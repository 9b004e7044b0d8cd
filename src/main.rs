use std::{env, fs::read_to_string, path::Path, sync::Arc, time::Instant};

use anyhow::{anyhow, bail, Context};
use highlighter::{
    format_error, get_line_at_position,
    grammar::{grammar::Grammar, registry::Registry},
    render::render_document,
};
use log::{debug, info};

const USAGE: &str = "usage: highlighter <file> [--language <name>] [--html]";

#[derive(Debug, Default)]
struct Options {
    file: String,
    language: Option<String>,
    html: bool,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
        let mut options = Options::default();
        let mut file = None;
        let mut args = args.skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--html" => options.html = true,
                "--language" | "-l" => {
                    let name = args.next().ok_or_else(|| anyhow!("--language needs a value"))?;
                    options.language = Some(name);
                }
                _ if arg.starts_with('-') => bail!("unknown option `{}`\n{}", arg, USAGE),
                _ if file.is_none() => file = Some(arg),
                _ => bail!("unexpected argument `{}`\n{}", arg, USAGE),
            }
        }

        options.file = file.ok_or_else(|| anyhow!(USAGE))?;
        Ok(options)
    }
}

fn pick_grammar(
    registry: &Registry,
    options: &Options,
    source: &str,
) -> anyhow::Result<Arc<Grammar>> {
    if let Some(name) = &options.language {
        return registry.get(name).with_context(|| {
            format!("unknown language `{}` (known: {:?})", name, registry.names())
        });
    }

    let extension = match Path::new(&options.file).extension().and_then(|e| e.to_str()) {
        Some("lds") => Some("ld"),
        other => other,
    };

    if let Some(grammar) = extension.and_then(|e| registry.get(e)) {
        debug!("picked `{}` from the file extension", grammar.name());
        return Ok(grammar);
    }

    let (grammar, score) = registry
        .detect(source)
        .with_context(|| format!("could not detect the language of {}", options.file))?;

    info!("detected `{}` with relevance {}", grammar.name(), score);
    Ok(grammar)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let options = Options::from_args(env::args())?;
    let source = read_to_string(&options.file)
        .with_context(|| format!("failed to read {}", options.file))?;

    let start = Instant::now();
    let registry = Registry::with_builtins().map_err(|e| anyhow!(format_error(&e)))?;
    let grammar = pick_grammar(&registry, &options, &source)?;

    if options.html {
        print!("{}", render_document(grammar.tokenize(&source), grammar.name()));
    } else {
        for token in grammar.tokenize(&source).filter(|t| t.is_classified()) {
            let (line, _, column) = get_line_at_position(&source, token.span.start)
                .unwrap_or((0, String::new(), 0));
            println!("{}:{} {} {:?}", line, column + 1, token.category, token.value);
        }
    }

    info!("Highlighted {} in {:?}", options.file, start.elapsed());
    Ok(())
}
