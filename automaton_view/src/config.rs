//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use automaton::{BoundarySource, DEFAULT_SEED, Error, Mode, Rule};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "automaton",
    version,
    about = "Simulate and display a one-dimensional cellular automaton"
)]
pub struct Options {
    /// Boundary condition string of '0' and '1'.
    #[arg(long, value_name = "BITS")]
    pub bound_cond_str: Option<String>,

    /// File with boundary condition.
    #[arg(long, value_name = "PATH")]
    pub bound_cond_file: Option<PathBuf>,

    /// File to build boundary condition from named patterns.
    #[arg(long, value_name = "PATH")]
    pub build_file: Option<PathBuf>,

    /// Width for randomizing boundary condition.
    #[arg(long = "rand", value_name = "WIDTH")]
    pub rand_width: Option<usize>,

    /// Seed for the random boundary condition.
    #[arg(long, requires = "rand_width")]
    pub seed: Option<u64>,

    /// Height of the polygon.
    #[arg(long, default_value_t = 3000)]
    pub height: usize,

    /// Rule that will be applied.
    #[arg(long, default_value_t = 110)]
    pub rule: u32,

    /// Directory of named patterns used by --build-file.
    #[arg(long, env = "AUTOMATON_RESOURCES", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/resources"))]
    pub resources: PathBuf,

    /// Advance one generation at a time in a ring of --height rows.
    #[arg(long)]
    pub interactive: bool,

    /// Milliseconds between generations in interactive mode.
    #[arg(long, default_value_t = 50)]
    pub interval_ms: u64,

    /// Print the rows as text instead of opening a window.
    #[arg(long)]
    pub dump: bool,

    #[arg(long, default_value_t = 1248)]
    pub window_width: usize,

    #[arg(long, default_value_t = 868)]
    pub window_height: usize,

    /// One of error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Options {
    /// Picks the single boundary source that was requested.
    pub fn boundary_source(&self) -> Result<BoundarySource, Error> {
        let mut sources = vec![];
        if let Some(bits) = &self.bound_cond_str {
            sources.push(("--bound-cond-str", BoundarySource::Literal(bits.clone())));
        }
        if let Some(path) = &self.bound_cond_file {
            sources.push(("--bound-cond-file", BoundarySource::File(path.clone())));
        }
        if let Some(path) = &self.build_file {
            sources.push(("--build-file", BoundarySource::Composition(path.clone())));
        }
        if let Some(width) = self.rand_width {
            let seed = self.seed.unwrap_or(DEFAULT_SEED);
            sources.push(("--rand", BoundarySource::Random { width, seed }));
        }

        match sources.len() {
            0 => Err(Error::Config("boundary condition is not set".to_owned())),
            1 => Ok(sources.remove(0).1),
            _ => {
                let flags: Vec<&str> = sources.iter().map(|(flag, _)| *flag).collect();
                Err(Error::Config(format!(
                    "only one boundary condition may be set, got {}",
                    flags.join(", ")
                )))
            }
        }
    }

    pub fn rule(&self) -> Result<Rule, Error> {
        Rule::try_from(self.rule)
    }

    pub fn mode(&self) -> Result<Mode, Error> {
        match (self.interactive, self.dump) {
            (true, true) => Err(Error::Config(
                "--interactive cannot be combined with --dump".to_owned(),
            )),
            (true, false) => Ok(Mode::Interactive),
            (false, _) => Ok(Mode::Batch),
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("automaton").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["--rand", "100"]);
        assert_eq!(options.height, 3000);
        assert_eq!(options.rule().unwrap(), Rule::new(110));
        assert_eq!(options.mode().unwrap(), Mode::Batch);
        assert_eq!(options.boundary_source().unwrap(), BoundarySource::random(100));
    }

    #[test]
    fn test_missing_boundary() {
        let err = parse(&[]).boundary_source().unwrap_err();
        assert!(err.to_string().contains("boundary condition is not set"));
    }

    #[test]
    fn test_conflicting_boundaries() {
        let options = parse(&["--bound-cond-str", "0101", "--rand", "10"]);
        match options.boundary_source() {
            Err(Error::Config(msg)) => {
                assert!(msg.contains("--bound-cond-str"));
                assert!(msg.contains("--rand"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_random() {
        let options = parse(&["--rand", "64", "--seed", "7"]);
        assert_eq!(
            options.boundary_source().unwrap(),
            BoundarySource::Random { width: 64, seed: 7 }
        );
        assert!(Options::try_parse_from(["automaton", "--seed", "7"]).is_err());
    }

    #[test]
    fn test_rule_out_of_range() {
        let options = parse(&["--rand", "8", "--rule", "256"]);
        assert!(matches!(options.rule(), Err(Error::Config(_))));
    }

    #[test]
    fn test_interactive_dump_conflict() {
        let options = parse(&["--rand", "8", "--interactive", "--dump"]);
        assert!(matches!(options.mode(), Err(Error::Config(_))));
        let options = parse(&["--rand", "8", "--interactive"]);
        assert_eq!(options.mode().unwrap(), Mode::Interactive);
    }
}
