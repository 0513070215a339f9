use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "quiz",
    bin_name = "quiz",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Run without a command to open the interactive prompt."
)]
#[command(about = "Keep quizzes and test yourself against them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiz data file (JSON), overrides the configured one
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Configuration file to load before ./quiz.toml and the user config
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// The command grammar, shared by the command line and the interactive prompt.
///
/// Ids are kept as raw strings: a missing or malformed id is reported by the
/// library's validator, not by clap.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show this help
    #[command(visible_alias = "h", display_order = 1)]
    Help,

    /// List the existing quizzes
    #[command(visible_alias = "ls", display_order = 2)]
    List,

    /// Show the question and answer of a quiz
    #[command(display_order = 3)]
    Show {
        /// Id of the quiz
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Add a new quiz interactively
    #[command(display_order = 4)]
    Add,

    /// Delete a quiz (later ids move down by one)
    #[command(visible_alias = "rm", display_order = 5)]
    Delete {
        /// Id of the quiz
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Edit a quiz
    #[command(display_order = 6)]
    Edit {
        /// Id of the quiz
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Test yourself against a quiz
    #[command(display_order = 7)]
    Test {
        /// Id of the quiz
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Play: answer every quiz in random order until the first miss
    #[command(visible_alias = "p", alias = "player", display_order = 8)]
    Play,

    /// Credits
    #[command(display_order = 9)]
    Credits,

    /// Leave the interactive prompt
    #[command(visible_alias = "q", display_order = 10)]
    Quit,
}

/// One line typed at the interactive prompt.
#[derive(Parser, Debug)]
#[command(
    name = "quiz",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct PromptLine {
    #[command(subcommand)]
    command: Commands,
}

/// Parses a prompt line with the same grammar as the command line.
pub fn parse_prompt_line(line: &str) -> Result<Commands, clap::Error> {
    PromptLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

/// One help entry per command: the names it answers to (`h|help`, `show <id>`)
/// and its description.
pub fn command_summary() -> Vec<(String, String)> {
    let cmd = PromptLine::command();
    let mut subcommands: Vec<&clap::Command> = cmd.get_subcommands().collect();
    subcommands.sort_by_key(|sub| sub.get_display_order());

    subcommands
        .into_iter()
        .map(|sub| {
            let mut names: Vec<&str> = sub.get_visible_aliases().collect();
            names.push(sub.get_name());
            let mut usage = names.join("|");
            for arg in sub.get_positionals() {
                usage.push_str(&format!(" <{}>", arg.get_id()));
            }
            let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
            (usage, about)
        })
        .collect()
}
