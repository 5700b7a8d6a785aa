//! Construction of the first generation.

use std::path::{Path, PathBuf};

use crate::bitrow::BitRow;
use crate::error::{Error, Result};
use crate::io::{read_and_join, read_text};
use crate::pattern::{PatternLibrary, parse_composition};

/// Seed used when a random boundary is requested without one.
pub const DEFAULT_SEED: u64 = 0;

/// Where the first generation comes from. Exactly one is chosen per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundarySource {
    /// A literal string of `'0'` and `'1'`.
    Literal(String),
    /// A file holding the bit string, possibly across several lines.
    File(PathBuf),
    /// A composition spec naming patterns from the library.
    Composition(PathBuf),
    /// A seeded pseudo-random row.
    Random { width: usize, seed: u64 },
}

impl BoundarySource {
    /// Random row of `width` cells using [`DEFAULT_SEED`].
    pub fn random(width: usize) -> Self {
        Self::Random {
            width,
            seed: DEFAULT_SEED,
        }
    }
}

/// The first generation of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryCondition {
    row: BitRow,
}

impl BoundaryCondition {
    /// Builds the boundary from `source`. The resource directory is only
    /// touched for [`BoundarySource::Composition`].
    pub fn from_source(source: &BoundarySource, resources: &Path) -> Result<Self> {
        match source {
            BoundarySource::Literal(bits) => Self::from_bits(bits),
            BoundarySource::File(path) => Self::from_file(path),
            BoundarySource::Composition(path) => CompositionBuilder::new(resources)?.build(path),
            BoundarySource::Random { width, seed } => Ok(Self::random(*width, *seed)),
        }
    }

    /// Parses a literal bit string.
    pub fn from_bits(bits: &str) -> Result<Self> {
        Ok(Self { row: bits.parse()? })
    }

    /// Reads a bit string from a file, joining its lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bits(&read_and_join(path)?)
    }

    /// Seeded random row.
    pub fn random(width: usize, seed: u64) -> Self {
        Self {
            row: BitRow::random(width, seed),
        }
    }

    /// Number of cells in the row.
    pub fn width(&self) -> usize {
        self.row.width()
    }

    /// The first generation.
    pub fn row(&self) -> &BitRow {
        &self.row
    }

    /// Hands the row over, e.g. to a [`Polygon`](crate::Polygon).
    pub fn into_row(self) -> BitRow {
        self.row
    }
}

impl From<BitRow> for BoundaryCondition {
    fn from(row: BitRow) -> Self {
        Self { row }
    }
}

/// Builds boundary conditions by concatenating named patterns.
#[derive(Debug, Clone)]
pub struct CompositionBuilder {
    library: PatternLibrary,
}

impl CompositionBuilder {
    /// Loads the pattern library from `resources`.
    pub fn new(resources: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_library(PatternLibrary::load(resources)?))
    }

    /// Uses an already loaded library.
    pub fn with_library(library: PatternLibrary) -> Self {
        Self { library }
    }

    /// The patterns available to compositions.
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Reads a composition spec from `path` and builds it.
    pub fn build(&self, path: impl AsRef<Path>) -> Result<BoundaryCondition> {
        let path = path.as_ref();
        let spec = read_text(path)?;
        self.build_str(&spec).map_err(|e| match e {
            Error::Validation(msg) => Error::Validation(format!("{msg} in {}", path.display())),
            e => e,
        })
    }

    /// Builds a composition spec given inline.
    pub fn build_str(&self, spec: &str) -> Result<BoundaryCondition> {
        let refs = parse_composition(spec)?;
        if refs.is_empty() {
            return Err(Error::Validation("no patterns specified".to_owned()));
        }
        let mut bits = String::new();
        for pattern in &refs {
            let pattern_bits = self.library.get(&pattern.name)?;
            bits.push_str(&pattern_bits.repeat(pattern.repeats));
        }
        BoundaryCondition::from_bits(&bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CompositionBuilder {
        CompositionBuilder::with_library([("glider", "10"), ("other", "0")].into_iter().collect())
    }

    #[test]
    fn test_compose() {
        let boundary = builder().build_str("2 glider other").unwrap();
        assert_eq!(boundary.row().to_string(), "10100");

        let boundary = builder().build_str("other 3glider").unwrap();
        assert_eq!(boundary.row().to_string(), "0101010");
    }

    #[test]
    fn test_compose_errors() {
        assert!(matches!(
            builder().build_str(""),
            Err(Error::Validation(msg)) if msg == "no patterns specified"
        ));
        assert!(matches!(
            builder().build_str("glider nope"),
            Err(Error::NotFound(name)) if name == "nope"
        ));

        let bad = CompositionBuilder::with_library([("bad", "01a")].into_iter().collect());
        assert!(matches!(bad.build_str("bad"), Err(Error::Parse { ch: 'a', .. })));
    }

    #[test]
    fn test_literal_source() {
        let boundary =
            BoundaryCondition::from_source(&BoundarySource::Literal("0110".into()), Path::new(""))
                .unwrap();
        assert_eq!(boundary.width(), 4);
        assert!(matches!(
            BoundaryCondition::from_bits("01 10"),
            Err(Error::Parse { ch: ' ', position: 2 })
        ));
    }

    #[test]
    fn test_random_source() {
        let a = BoundaryCondition::from_source(&BoundarySource::random(100), Path::new("")).unwrap();
        let b = BoundaryCondition::random(100, DEFAULT_SEED);
        assert_eq!(a, b);
        assert_eq!(a.width(), 100);

        let seeded = BoundarySource::Random { width: 100, seed: 9 };
        let c = BoundaryCondition::from_source(&seeded, Path::new("")).unwrap();
        assert_eq!(c, BoundaryCondition::random(100, 9));
    }
}
