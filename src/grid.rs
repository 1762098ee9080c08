use faer::{ColMut, ColRef, Mat, MatMut, MatRef};

/// Two-dimensional array of 3-vectors indexed by (chordwise point,
/// beam node), one column per cell, chord-major. Holds grid point
/// positions, grid point velocities, or aerodynamic forces; the
/// mappers overwrite it wholesale so no history survives a call.
pub struct AeroGrid {
    data: Mat<f64>,
    n_chord: usize,
    n_span: usize,
}

impl AeroGrid {
    pub fn new(n_chord: usize, n_span: usize) -> Self {
        Self {
            data: Mat::zeros(3, n_chord * n_span),
            n_chord,
            n_span,
        }
    }

    /// (chordwise points, beam nodes)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_chord, self.n_span)
    }

    pub fn num_chord_points(&self) -> usize {
        self.n_chord
    }

    pub fn num_span_points(&self) -> usize {
        self.n_span
    }

    #[inline]
    fn col_index(&self, j_chord: usize, i_node: usize) -> usize {
        j_chord * self.n_span + i_node
    }

    pub fn point(&self, j_chord: usize, i_node: usize) -> ColRef<f64> {
        self.data.col(self.col_index(j_chord, i_node))
    }

    pub fn point_mut(&mut self, j_chord: usize, i_node: usize) -> ColMut<f64> {
        let col = self.col_index(j_chord, i_node);
        self.data.col_mut(col)
    }

    /// Backing storage `[3][n_chord * n_span]`
    pub fn columns(&self) -> MatRef<f64> {
        self.data.as_ref()
    }

    pub fn columns_mut(&mut self) -> MatMut<f64> {
        self.data.as_mut()
    }

    pub fn fill_zero(&mut self) {
        self.data.as_mut().fill_zero();
    }
}

/// Force and moment resultants at beam nodes `[6][n_nodes]`: rows 0-2
/// are force, rows 3-5 moment, in the frame the beam solver expects
/// its applied loads.
pub struct BeamLoads {
    pub data: Mat<f64>,
}

impl BeamLoads {
    pub fn new(n_nodes: usize) -> Self {
        Self {
            data: Mat::zeros(6, n_nodes),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.data.ncols()
    }

    pub fn force(&self, i_node: usize) -> ColRef<f64> {
        self.data.col(i_node).subrows(0, 3)
    }

    pub fn moment(&self, i_node: usize) -> ColRef<f64> {
        self.data.col(i_node).subrows(3, 3)
    }

    pub fn fill_zero(&mut self) {
        self.data.as_mut().fill_zero();
    }
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
