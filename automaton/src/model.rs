//! Couples a rule with a polygon.

use crate::boundary::BoundaryCondition;
use crate::error::{Error, Result};
use crate::polygon::Polygon;
use crate::rule::Rule;

/// How the polygon is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every row is computed at construction and never changes again.
    Batch,
    /// Rows are computed one at a time by [`Model::advance`], in a ring of
    /// `height` slots.
    Interactive,
}

/// Lifecycle of a model. Construction moves straight out of the
/// uninitialized state, so it is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Batch model, fully computed.
    Complete,
    /// Interactive model holding only the boundary condition.
    Filled,
    /// Interactive model that has advanced at least once.
    Running,
}

/// A rule and the generations it produced.
#[derive(Debug, Clone)]
pub struct Model {
    rule: Rule,
    polygon: Polygon,
    mode: Mode,
    state: State,
}

impl Model {
    /// Builds a model in the given mode.
    pub fn new(rule: Rule, boundary: BoundaryCondition, height: usize, mode: Mode) -> Result<Self> {
        let mut polygon = Polygon::new(height, boundary.into_row())?;
        let state = match mode {
            Mode::Batch => {
                polygon.fill_all(rule);
                State::Complete
            }
            Mode::Interactive => State::Filled,
        };
        Ok(Self {
            rule,
            polygon,
            mode,
            state,
        })
    }

    /// Computes all `height` generations up front.
    pub fn batch(rule: Rule, boundary: BoundaryCondition, height: usize) -> Result<Self> {
        Self::new(rule, boundary, height, Mode::Batch)
    }

    /// Holds only the boundary condition until [`Model::advance`] is called.
    pub fn interactive(rule: Rule, boundary: BoundaryCondition, height: usize) -> Result<Self> {
        Self::new(rule, boundary, height, Mode::Interactive)
    }

    /// Computes the next generation. Only valid in interactive mode.
    pub fn advance(&mut self) -> Result<()> {
        if self.mode == Mode::Batch {
            return Err(Error::State(
                "cannot advance a model that was filled in batch mode".to_owned(),
            ));
        }
        self.polygon.advance_one(self.rule);
        self.state = State::Running;
        Ok(())
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> State {
        self.state
    }
}
