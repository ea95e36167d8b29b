//! Lexiclear CLI entry point.

use lexiclear_engine::Review;
use lexiclear_matcher::{LexiconTagger, find_matches};
use lexiclear_runtime::{Repl, Settings, io, logging};
use lexiclear_vocabulary::Vocabulary;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    text: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    export: Option<String>,
    log_level: Option<String>,
    log_json: bool,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default().with_log_json(self.log_json || logging::should_use_json());
        if let Some(path) = &self.vocabulary {
            settings = settings.with_vocabulary_path(path);
        }
        if let Some(path) = &self.lexicon {
            settings = settings.with_lexicon_path(path);
        }
        if let Some(name) = &self.export {
            settings = settings.with_export_file_name(name);
        }
        if let Some(level) = &self.log_level {
            settings = settings.with_log_level(level);
        }
        settings
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("{flag} requires a value"));
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--log-json" => config.log_json = true,
            "--vocabulary" => config.vocabulary = Some(PathBuf::from(value("--vocabulary")?)),
            "--lexicon" => config.lexicon = Some(PathBuf::from(value("--lexicon")?)),
            "--export" => config.export = Some(value("--export")?),
            "--log-level" => config.log_level = Some(value("--log-level")?),
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => {
                if config.text.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.text = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lexiclear {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = config.settings();
    logging::setup_logging(settings.log_json, &settings.log_level)?;

    let Some(text_path) = &config.text else {
        return Err("no text file given (see --help)".into());
    };

    let vocabulary = io::load_vocabulary(&settings.vocabulary_path)?;
    let mut tagger = match &settings.lexicon_path {
        Some(path) => io::load_lexicon(path)?,
        None => LexiconTagger::new(),
    };

    let text = io::read_text(text_path, &settings)?;
    let records = find_matches(&text, &vocabulary, &mut tagger)?;
    let review = Review::new(text, records);

    if config.batch_mode {
        return run_batch(&review, &vocabulary, &config);
    }

    let mut repl = Repl::new(review, vocabulary, settings)?;
    repl.run()?;
    Ok(())
}

/// Lists the matches, and exports when `--export` was given.
fn run_batch(
    review: &Review,
    vocabulary: &Vocabulary,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if review.is_clean() {
        println!("The text looks clean.");
    }

    for record in review.records() {
        let word = vocabulary
            .get(record.term_id)
            .map_or("?", |term| term.word.as_str());
        println!("{}\t{}\t{word}", record.position, record.surface_text);
    }

    if let Some(path) = &config.export {
        let written = io::write_text(path, &review.export(vocabulary)?)?;
        eprintln!("exported to {}", written.display());
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLexiclear\x1b[0m - Find ambiguous words and choose what you meant

\x1b[1mUSAGE:\x1b[0m
    lexiclear [OPTIONS] <TEXT_FILE>

\x1b[1mARGUMENTS:\x1b[0m
    <TEXT_FILE>    Text to check (.txt)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -b, --batch             List matches and exit (no REPL)
    --vocabulary PATH       Vocabulary file [default: ambiguous_words.json]
    --lexicon PATH          Lexicon for noun/verb matching
    --export PATH           Export file name [default: textChecked.txt]
    --log-level LEVEL       Log filter when RUST_LOG is unset [default: warn]
    --log-json              Log as JSON (also LEXICLEAR_LOG_JSON=1)

\x1b[1mEXAMPLES:\x1b[0m
    lexiclear essay.txt                          Review essay.txt
    lexiclear --lexicon en.json essay.txt        Also match nouns and verbs
    lexiclear -b --export clean essay.txt        List matches, write clean.txt

\x1b[1mREPL COMMANDS:\x1b[0m
    next, prev, show     Move between matches
    options, pick <n>    List and choose replacements
    progress             Show how many matches are checked
    text, export [path]  Print or write the result
    save, restore <path> Save or resume a review
    Ctrl+D               Exit REPL"
    );
}
