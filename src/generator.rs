use crate::config::{Alphabet, Config};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Produces the text of each output line, without the trailing newline.
pub struct LineGenerator {
    alphabet: Alphabet,
    line_width: usize,
    line_numbers: bool,
    template: Option<String>,
    rng: StdRng,
}

impl LineGenerator {
    /// Builds a generator for the given configuration.
    ///
    /// In deterministic mode the template line is computed here once and
    /// reused for every line. Otherwise lines are random, seeded from
    /// `config.seed` when present and from OS entropy when not.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let template = config
            .deterministic
            .then(|| template_line(&config.alphabet, config.line_width()));

        Self {
            alphabet: config.alphabet.clone(),
            line_width: config.line_width(),
            line_numbers: config.line_numbers,
            template,
            rng,
        }
    }

    /// Returns the line for the 0-based `index`, exactly `line_width - 1`
    /// characters long.
    pub fn line(&mut self, index: u64) -> String {
        let number = self.line_numbers.then(|| index + 1);
        let width = self.line_width - 1;

        if let Some(template) = &self.template {
            return compose(number, template, width);
        }
        let body = self.random_body();
        compose(number, &body, width)
    }

    fn random_body(&mut self) -> String {
        // Alphabet is never empty.
        let chars = self.alphabet.chars();
        (0..self.line_width)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }
}

/// The alphabet repeated until it covers `width` characters, cut to exactly `width`.
pub fn template_line(alphabet: &Alphabet, width: usize) -> String {
    alphabet.chars().iter().cycle().take(width).collect()
}

/// Optional `{:>6} ` line number followed by `body`, cut to `width` characters.
fn compose(number: Option<u64>, body: &str, width: usize) -> String {
    let prefix = number.map(|number| format!("{:>6} ", number)).unwrap_or_default();
    let line: String = prefix.chars().chain(body.chars()).take(width).collect();
    debug_assert_eq!(line.chars().count(), width, "line shorter than {}", width);
    line
}
