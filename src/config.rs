use clap::Parser;
use log::LevelFilter;
use std::fmt;

pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const EXAMPLES: &str = "\
EXAMPLES:
    # Four random lines, 15 characters plus the newline
    $ gentestdata -n 4 -w 16

    # Every 4th line goes to stderr
    $ gentestdata -d -l -n 12 -w 24 -i 4 -a abcdefghijklmnopqrstuvwxyz
         1 abcdefghijklmnop
         2 abcdefghijklmnop
         3 abcdefghijklmnop
         4 abcdefghijklmnop
         ...
        12 abcdefghijklmnop

    # Only the stderr lines
    $ gentestdata -d -l -n 12 -w 24 -i 4 -a abcdefghijklmnopqrstuvwxyz 1>/dev/null
         4 abcdefghijklmnop
         8 abcdefghijklmnop
        12 abcdefghijklmnop

    # Deterministic output for unit tests
    $ gentestdata -d -l -n 3 -w 32 -a 'Lorem ipsum dolor sit amet, consectetur adipiscing elit'
         1 Lorem ipsum dolor sit am
         2 Lorem ipsum dolor sit am
         3 Lorem ipsum dolor sit am

    # Output size is always lines * width bytes
    $ gentestdata -n 32 -w 32 -a 0123456789abcdef | wc
         32      32    1024";

/// Characters line content is drawn from. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            return Err(String::from("alphabet cannot be empty"));
        }
        Ok(Self(value.chars().collect()))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self(DEFAULT_ALPHABET.chars().collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().collect::<String>())
    }
}

fn parse_alphabet(value: &str) -> Result<Alphabet, String> {
    Alphabet::new(value)
}

/// Generates lines of text on stdout and stderr for testing output handling.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gentestdata",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    about,
    long_about = None,
    args_override_self = true,
    after_help = EXAMPLES
)]
pub struct Config {
    /// Alphabet used to generate the data
    #[arg(
        short,
        long,
        value_name = "STRING",
        default_value(DEFAULT_ALPHABET),
        value_parser = parse_alphabet,
        allow_hyphen_values = true
    )]
    pub alphabet: Alphabet,

    /// Repeat the alphabet instead of picking random characters, useful for unit tests
    #[arg(short, long)]
    pub deterministic: bool,

    /// Send every NUMBER-th line to stderr, 0 keeps everything on stdout
    #[arg(
        short,
        long,
        value_name = "NUMBER",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=1_000_000)
    )]
    pub interleave: u32,

    /// Print line numbers in the first 7 characters
    #[arg(short, long)]
    pub line_numbers: bool,

    /// Number of lines to print
    #[arg(
        short,
        long,
        value_name = "NUMBER",
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(1..=1_000_000_000)
    )]
    pub num_lines: u32,

    /// Total line width, including the newline
    #[arg(
        short,
        long,
        visible_alias = "line-width",
        value_name = "NUMBER",
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(16..=1_000_000)
    )]
    pub width: u32,

    /// Seed for the random generator, makes random output reproducible
    #[arg(short, long, value_name = "NUMBER")]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug and trace), logs go to stderr
    #[arg(long, default_value("off"), env("GENTESTDATA_LOG_LEVEL"))]
    pub log_level: LevelFilter,
}

impl Config {
    /// Width of a line including its trailing newline.
    pub fn line_width(&self) -> usize {
        self.width as usize
    }

    /// Characters written before the newline.
    pub fn visible_width(&self) -> usize {
        self.line_width() - 1
    }
}
