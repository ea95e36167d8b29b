//! The interactive review REPL.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;

use lexiclear_engine::Review;
use lexiclear_foundation::{CharCursor, Error, Result, char_len};
use lexiclear_vocabulary::Vocabulary;

use crate::config::Settings;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::{io as files, snapshot};

/// Characters of surrounding text shown on each side of a match.
const CONTEXT_RADIUS: usize = 40;

/// Command names, in help order.
const COMMANDS: &[&str] = &[
    "next", "prev", "show", "options", "pick", "progress", "text", "export", "save", "restore", "help", "quit",
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to the next match.
    Next,
    /// Move to the previous match.
    Prev,
    /// Show the current match in context.
    Show,
    /// List the replacements for the current match.
    Options,
    /// Pick an option by its 1-based number.
    Pick(usize),
    /// Show how many matches have a choice.
    Progress,
    /// Print the text with all choices applied.
    Text,
    /// Write the text with all choices applied.
    Export(Option<PathBuf>),
    /// Save the review to a snapshot file.
    Save(PathBuf),
    /// Replace the review with one from a snapshot file.
    Restore(PathBuf),
    /// List commands.
    Help,
    /// Leave the REPL.
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a usage message if the line is not a valid command.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();
        let argument = (!rest.is_empty()).then(|| rest.join(" "));

        let command = match (name, argument) {
            ("next" | "n", None) => Self::Next,
            ("prev" | "p", None) => Self::Prev,
            ("show" | "s", None) => Self::Show,
            ("options" | "o", None) => Self::Options,
            ("pick", Some(n)) => Self::Pick(n.parse().map_err(|_| format!("not an option number: {n}"))?),
            ("pick", None) => return Err("usage: pick <n>".to_string()),
            ("progress", None) => Self::Progress,
            ("text", None) => Self::Text,
            ("export", path) => Self::Export(path.map(PathBuf::from)),
            ("save", Some(path)) => Self::Save(PathBuf::from(path)),
            ("restore", Some(path)) => Self::Restore(PathBuf::from(path)),
            ("save" | "restore", None) => return Err(format!("usage: {name} <path>")),
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit" | "q", None) => Self::Quit,
            (name, _) if COMMANDS.contains(&name) => return Err(format!("{name} takes no argument")),
            (name, _) => return Err(format!("unknown command: {name} (try `help`)")),
        };
        Ok(command)
    }
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text to show the user.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive review REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The review being driven.
    review: Review,

    /// Vocabulary the matches came from.
    vocabulary: Vocabulary,

    /// Export defaults.
    settings: Settings,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(review: Review, vocabulary: Vocabulary, settings: Settings) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, review, vocabulary, settings))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, review: Review, vocabulary: Vocabulary, settings: Settings) -> Self {
        editor.set_keywords(COMMANDS.iter().map(|c| (*c).to_string()).collect());
        Self {
            editor,
            review,
            vocabulary,
            settings,
            show_banner: true,
            prompt: "review> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the review being driven.
    #[must_use]
    pub fn review(&self) -> &Review {
        &self.review
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        if self.review.is_clean() {
            println!("The text looks clean.");
        } else {
            self.print_output(&self.render_current());
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        let command = match Command::parse(trimmed) {
            Ok(command) => command,
            Err(usage) => {
                eprintln!("\x1b[33m{usage}\x1b[0m");
                return Ok(true);
            }
        };

        match self.execute(command) {
            Ok(Response::Output(text)) => self.print_output(&text),
            Ok(Response::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Executes a command against the review.
    ///
    /// A failing command leaves the review as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the command needs the vocabulary or the file
    /// system and that fails.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let output = match command {
            Command::Next => {
                self.review.next();
                self.render_current()
            }
            Command::Prev => {
                self.review.previous();
                self.render_current()
            }
            Command::Show => self.render_current(),
            Command::Options => self.render_options()?,
            Command::Pick(number) => self.pick(number)?,
            Command::Progress => self.render_progress(),
            Command::Text => self.review.export(&self.vocabulary)?,
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(&self.settings.export_file_name));
                let text = self.review.export(&self.vocabulary)?;
                let written = files::write_text(&path, &text)?;
                format!("exported to {}", written.display())
            }
            Command::Save(path) => {
                snapshot::save_to_file(&self.review, &path)?;
                format!("saved to {}", path.display())
            }
            Command::Restore(path) => {
                self.review = snapshot::load_from_file(&path)?;
                format!("restored {}\n{}", path.display(), self.render_current())
            }
            Command::Help => help_text(),
            Command::Quit => return Ok(Response::Quit),
        };
        Ok(Response::Output(output))
    }

    fn pick(&mut self, number: usize) -> Result<String> {
        let options = self.review.options(&self.vocabulary)?;
        let Some(option) = number.checked_sub(1).and_then(|i| options.get(i)) else {
            return Ok(format!("no option {number} (1-{} available)", options.len()));
        };

        self.review.choose(option.choice);
        let word = self.review.preview(&self.vocabulary)?.unwrap_or_default();
        Ok(format!("-> {word}\n{}", self.render_progress()))
    }

    fn render_current(&self) -> String {
        let Some(record) = self.review.current() else {
            return "The text looks clean.".to_string();
        };

        let total = self.review.records().len();
        let mut out = format!(
            "[{}/{total}] {}",
            self.review.current_index() + 1,
            excerpt(self.review.text(), record.position, record.end())
        );
        match self.review.preview(&self.vocabulary) {
            Ok(Some(word)) => {
                let _ = write!(out, "\n  chosen: {word}");
            }
            Ok(None) => out.push_str("\n  unresolved"),
            Err(e) => {
                let _ = write!(out, "\n  invalid choice: {e}");
            }
        }
        out
    }

    fn render_options(&self) -> Result<String> {
        let options = self.review.options(&self.vocabulary)?;
        let mut out = String::new();
        let mut group = None;

        for (number, option) in options.iter().enumerate() {
            if group != Some(option.group) {
                group = Some(option.group);
                let _ = writeln!(out, "\x1b[1m{}\x1b[0m - {}", option.term_word, option.meaning);
            }
            let _ = writeln!(out, "  {}) {}", number + 1, option.label);
        }
        Ok(out.trim_end().to_string())
    }

    fn render_progress(&self) -> String {
        let (resolved, total) = self.review.progress();
        format!("confused words checked: {resolved}/{total}")
    }

    #[allow(clippy::unused_self)]
    fn print_output(&self, text: &str) {
        if !text.is_empty() {
            println!("{text}");
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(context) => eprintln!("\x1b[31mError: {error}\n{}\x1b[0m", context.to_string().trim_end()),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mLexiclear\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} ambiguous word(s) found. Type `help` for commands, Ctrl+D to exit.\n",
            self.review.records().len()
        );
        let _ = io::stdout().flush();
    }
}

fn help_text() -> String {
    "\
next, n            Go to the next match
prev, p            Go to the previous match
show, s            Show the current match in context
options, o         List replacements for the current match
pick <n>           Choose replacement number n
progress           Show how many matches are checked
text               Print the text with choices applied
export [path]      Write the text with choices applied
save <path>        Save this review
restore <path>     Resume a saved review
help               Show this list
quit               Leave"
        .to_string()
}

/// The text around characters `[start, end)`, with the match highlighted.
fn excerpt(text: &str, start: usize, end: usize) -> String {
    let total = char_len(text);
    if start > end || end > total {
        return String::new();
    }
    let from = start.saturating_sub(CONTEXT_RADIUS);
    let to = end.saturating_add(CONTEXT_RADIUS).min(total);

    let mut cursor = CharCursor::new(text);
    let bounds = (cursor.byte_of(from), cursor.byte_of(start), cursor.byte_of(end), cursor.byte_of(to));
    let (Some(from_byte), Some(start_byte), Some(end_byte), Some(to_byte)) = bounds else {
        return String::new();
    };

    let lead = if from > 0 { "..." } else { "" };
    let tail = if to < total { "..." } else { "" };
    format!(
        "{lead}{}\x1b[1;33m{}\x1b[0m{}{tail}",
        text[from_byte..start_byte].replace('\n', " "),
        &text[start_byte..end_byte],
        text[end_byte..to_byte].replace('\n', " ")
    )
}
