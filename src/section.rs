use faer::{col, Mat};

use crate::error::CouplingError;
use crate::util::rotation_vector_as_matrix;

/// Chordwise offsets of the aerodynamic surface cross section,
/// expressed in the beam cross-section frame. The section shape is
/// fixed along the span: the same offsets are reused at every beam
/// node.
pub struct Section {
    /// Offset vectors `[3][n_points]`, leading edge first
    pub points: Mat<f64>,
}

impl Section {
    /// Builds the chordwise offset table for a flat surface of
    /// `n_panels` panels. Offsets are shifted a quarter panel toward
    /// the trailing edge so panel collocation points land at panel
    /// quarter-chord.
    ///
    /// The elastic axis sits at the section origin; `elastic_axis` is
    /// Theodorsen's `a` parameter, its position in semi-chords aft of
    /// mid-chord. `twist` is in radians and rotates the section about
    /// the beam axis.
    pub fn chordwise(
        n_panels: usize,
        chord: f64,
        twist: f64,
        elastic_axis: f64,
    ) -> Result<Self, CouplingError> {
        if n_panels == 0 {
            return Err(CouplingError::EmptySection);
        }

        let delta_c = chord / n_panels as f64;
        let offset = 0.25 * delta_c;
        let leading_edge = 0.5 * chord + elastic_axis * 0.5 * chord - offset;

        let mut r = Mat::<f64>::zeros(3, 3);
        rotation_vector_as_matrix(col![twist, 0., 0.].as_ref(), r.as_mut());

        let mut points = Mat::<f64>::zeros(3, n_panels + 1);
        points.col_iter_mut().enumerate().for_each(|(j, mut p)| {
            let flat = col![0., leading_edge - j as f64 * delta_c, 0.];
            p.copy_from(&r * &flat);
        });

        Ok(Self { points })
    }

    /// Section from an explicit offset table `[3][n_points]`, e.g. a
    /// cambered profile produced outside this crate
    pub fn from_points(points: Mat<f64>) -> Self {
        Self { points }
    }

    /// Number of chordwise points (panels + 1)
    pub fn num_points(&self) -> usize {
        self.points.ncols()
    }
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
