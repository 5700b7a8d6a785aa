//! One-dimensional binary cellular automata on a ring.
//!
//! A [`BoundaryCondition`] supplies the first generation, a [`Rule`] maps each
//! three-cell neighborhood to the next state, and a [`Polygon`] holds the
//! generations that follow. [`Model`] ties them together, either computing
//! every generation at once or one at a time.
//!
//! ```
//! use automaton::{BoundaryCondition, Model, Rule};
//!
//! let boundary = BoundaryCondition::from_bits("000000000001").unwrap();
//! let model = Model::batch(Rule::new(110), boundary, 3).unwrap();
//! assert_eq!(model.polygon().to_string(), "000000000001\n000000000011\n000000000111\n");
//! ```

mod bitrow;
mod boundary;
mod error;
mod io;
mod model;
mod pattern;
mod polygon;
mod rule;

pub use bitrow::BitRow;
pub use boundary::{BoundaryCondition, BoundarySource, CompositionBuilder, DEFAULT_SEED};
pub use error::{Error, Result};
pub use io::{read_and_join, read_text};
pub use model::{Mode, Model, State};
pub use pattern::{PatternLibrary, PatternRef, parse_composition};
pub use polygon::{Polygon, wrap_index};
pub use rule::{Neighborhood, Rule};
