use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::Serialize;

/// Stability of the explicit scheme for a given `α = D·Δt/Δz²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stability {
    alpha: f64,
}

impl Stability {
    /// Largest `α` for which the explicit scheme does not amplify errors.
    pub const LIMIT: f64 = 0.5;

    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.alpha <= Self::LIMIT
    }
}

/// Temperatures of a run, one row per depth node and one column per time
/// level.
///
/// Column 0 holds the initial profile. Row 0 is the surface node.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatProfile {
    grid: Array2<f64>,
    node_spacing: f64,
    stability: Stability,
}

impl HeatProfile {
    pub(super) fn new(grid: Array2<f64>, node_spacing: f64, stability: Stability) -> Self {
        Self {
            grid,
            node_spacing,
            stability,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Array2<f64> {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Array2<f64> {
        self.grid
    }

    /// Returns `(nodes, time levels)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.grid.dim()
    }

    /// Depth of each node below the surface, in metres.
    #[must_use]
    pub fn depths(&self) -> Array1<f64> {
        let nodes = self.grid.nrows();
        Array1::from_shape_fn(nodes, |i| i as f64 * self.node_spacing)
    }

    /// Time series at node `i`, or `None` past the bottom node.
    #[must_use]
    pub fn node(&self, i: usize) -> Option<ArrayView1<'_, f64>> {
        (i < self.grid.nrows()).then(|| self.grid.row(i))
    }

    /// Profile at time level `j`, or `None` past the last level.
    #[must_use]
    pub fn column(&self, j: usize) -> Option<ArrayView1<'_, f64>> {
        (j < self.grid.ncols()).then(|| self.grid.column(j))
    }

    #[must_use]
    pub fn surface(&self) -> ArrayView1<'_, f64> {
        self.grid.row(0)
    }

    #[must_use]
    pub fn bottom(&self) -> ArrayView1<'_, f64> {
        self.grid.row(self.grid.nrows() - 1)
    }

    /// Temperature at node `i` and time level `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.grid.get((i, j)).copied()
    }

    /// Returns the profile at the last time level.
    #[must_use]
    pub fn last_column(&self) -> ArrayView1<'_, f64> {
        self.grid.index_axis(Axis(1), self.grid.ncols() - 1)
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.stability.alpha()
    }

    #[must_use]
    pub fn stability(&self) -> Stability {
        self.stability
    }
}
