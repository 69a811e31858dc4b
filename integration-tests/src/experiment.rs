//! Experiments described in TOML.
//!
//! ```toml
//! name = "restart study"
//! start = [0.0, 0.0]
//!
//! [solver]
//! modification = "polak_ribiere"
//! termination = "gradient_norm"
//! accuracy = 1e-4
//!
//! [solver.line]
//! refiner = "golden_section"
//!
//! [penalty]
//! violation_tol = 1e-3
//!
//! [[regions]]
//! kind = "circle"
//! center = [-2.0, 0.5]
//! radius = 1.0
//! outside = true
//! ```
//!
//! Without regions the objective is minimized directly; with regions the
//! penalty method runs, using `[solver]` for every inner solve.

use contour_core::{
    Constraint, Objective,
    region::{Circle, Complement, Ellipse, HalfPlane},
};
use contour_observers::{Counted, SearchPath};
use contour_solvers::{conjugate_gradient, penalty};
use serde::Deserialize;
use thiserror::Error;

/// A single configured run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experiment {
    pub name: String,
    pub start: [f64; 2],

    #[serde(default)]
    pub solver: conjugate_gradient::Config,

    #[serde(default)]
    pub penalty: PenaltySettings,

    #[serde(default)]
    pub regions: Vec<Region>,
}

/// Outer-loop settings for constrained experiments.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PenaltySettings {
    pub initial_coefficient: f64,
    pub growth: f64,
    pub violation_tol: f64,
    pub max_outer_iters: usize,
}

/// A constraint region; `outside = true` makes its outside feasible.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Region {
    Circle {
        center: [f64; 2],
        radius: f64,
        #[serde(default)]
        outside: bool,
    },
    Ellipse {
        center: [f64; 2],
        semi_axes: [f64; 2],
        #[serde(default)]
        angle_deg: f64,
        #[serde(default)]
        outside: bool,
    },
    HalfPlane {
        point: [f64; 2],
        angle_deg: f64,
        #[serde(default)]
        outside: bool,
    },
}

/// What an experiment produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub outcome: Outcome,

    /// Points visited, ending at the solution.
    pub path: Vec<[f64; 2]>,

    /// Objective evaluations used.
    pub evaluations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Unconstrained(conjugate_gradient::Solution<2>),
    Constrained(penalty::Solution<2>),
}

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid experiment file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Unconstrained(#[from] conjugate_gradient::Error),

    #[error(transparent)]
    Constrained(#[from] penalty::Error),
}

impl Default for PenaltySettings {
    fn default() -> Self {
        let defaults = penalty::Config::default();
        Self {
            initial_coefficient: defaults.initial_coefficient,
            growth: defaults.growth,
            violation_tol: defaults.violation_tol,
            max_outer_iters: defaults.max_outer_iters,
        }
    }
}

impl Region {
    /// Builds the constraint this region describes.
    #[must_use]
    pub fn constraint(&self) -> Box<dyn Constraint<2>> {
        match *self {
            Self::Circle {
                center,
                radius,
                outside,
            } => boxed(Circle::new(center, radius), outside),
            Self::Ellipse {
                center,
                semi_axes,
                angle_deg,
                outside,
            } => boxed(Ellipse::new(center, semi_axes, angle_deg), outside),
            Self::HalfPlane {
                point,
                angle_deg,
                outside,
            } => boxed(HalfPlane::new(point, angle_deg), outside),
        }
    }
}

fn boxed<C: Constraint<2> + 'static>(region: C, outside: bool) -> Box<dyn Constraint<2>> {
    if outside {
        Box::new(Complement(region))
    } else {
        Box::new(region)
    }
}

impl Outcome {
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        match self {
            Self::Unconstrained(solution) => solution.x,
            Self::Constrained(solution) => solution.x,
        }
    }

    /// Returns the unpenalized objective at the solution.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Unconstrained(solution) => solution.value,
            Self::Constrained(solution) => solution.objective,
        }
    }
}

impl Experiment {
    /// Parses an experiment from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or names an unknown option.
    pub fn from_toml(text: &str) -> Result<Self, ExperimentError> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    pub fn penalty_config(&self) -> penalty::Config {
        penalty::Config {
            initial_coefficient: self.penalty.initial_coefficient,
            growth: self.penalty.growth,
            violation_tol: self.penalty.violation_tol,
            max_outer_iters: self.penalty.max_outer_iters,
            inner: self.solver,
        }
    }

    /// Runs the experiment on `objective`.
    ///
    /// # Errors
    ///
    /// Returns the solver's error if the run fails.
    pub fn run<O: Objective<2>>(&self, objective: O) -> Result<Report, ExperimentError> {
        let counted = Counted::new(objective);
        let mut path = SearchPath::new();

        let outcome = if self.regions.is_empty() {
            let solution =
                conjugate_gradient::minimize(&counted, self.start, &self.solver, &mut path)?;
            Outcome::Unconstrained(solution)
        } else {
            let owned: Vec<_> = self.regions.iter().map(Region::constraint).collect();
            let constraints: Vec<&dyn Constraint<2>> = owned.iter().map(|c| &**c).collect();
            let solution = penalty::minimize(
                &counted,
                &constraints,
                self.start,
                &self.penalty_config(),
                &mut path,
            )?;
            Outcome::Constrained(solution)
        };

        path.push(outcome.x());
        Ok(Report {
            outcome,
            path: path.into_points(),
            evaluations: counted.calls(),
        })
    }
}
