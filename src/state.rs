use faer::{Col, ColRef, Mat};

use crate::error::CouplingError;
use crate::topology::ElementTopology;

/// Beam solver output driving the aerodynamic grid, one column per
/// entry.
///
/// Positions and velocities are nodal; rotation vectors and their
/// rates are stored per (element, local node) pair because neighboring
/// 3-node elements share boundary nodes while keeping their own
/// rotation columns. [`BeamState::node_psi`] resolves a global node
/// index to its canonical column.
pub struct BeamState {
    topology: ElementTopology,
    n_elems: usize,
    /// Nodal positions in the base frame `[3][n_nodes]`
    pub pos: Mat<f64>,
    /// Nodal translational velocities `[3][n_nodes]`
    pub pos_dot: Mat<f64>,
    /// Cross-section rotation vectors `[3][n_elems * nodes_per_element]`
    pub psi: Mat<f64>,
    /// Rotation vector rates, same layout as `psi`
    pub psi_dot: Mat<f64>,
}

impl BeamState {
    /// Creates a zeroed state for `n_nodes` nodes. The node count must
    /// tile into whole elements: `n_nodes = n_elems * (k - 1) + 1`.
    pub fn new(topology: ElementTopology, n_nodes: usize) -> Result<Self, CouplingError> {
        let k = topology.nodes_per_element();
        if n_nodes < k || (n_nodes - 1) % (k - 1) != 0 {
            return Err(CouplingError::NodeElementMismatch {
                n_nodes,
                nodes_per_element: k,
            });
        }
        let n_elems = topology.num_elements(n_nodes);

        Ok(Self {
            topology,
            n_elems,
            pos: Mat::zeros(3, n_nodes),
            pos_dot: Mat::zeros(3, n_nodes),
            psi: Mat::zeros(3, n_elems * k),
            psi_dot: Mat::zeros(3, n_elems * k),
        })
    }

    pub fn topology(&self) -> ElementTopology {
        self.topology
    }

    pub fn num_nodes(&self) -> usize {
        self.pos.ncols()
    }

    pub fn num_elements(&self) -> usize {
        self.n_elems
    }

    /// Column of `psi`/`psi_dot` holding an (element, local node) pair
    pub fn elem_col(&self, i_elem: usize, i_local: usize) -> usize {
        i_elem * self.topology.nodes_per_element() + i_local
    }

    /// Rotation vector of the cross section at a global node
    pub fn node_psi(&self, i_node: usize) -> ColRef<f64> {
        let (i_elem, i_local) = self.topology.locate(i_node, self.num_nodes());
        self.psi.col(self.elem_col(i_elem, i_local))
    }

    /// Rotation vector rate at a global node
    pub fn node_psi_dot(&self, i_node: usize) -> ColRef<f64> {
        let (i_elem, i_local) = self.topology.locate(i_node, self.num_nodes());
        self.psi_dot.col(self.elem_col(i_elem, i_local))
    }

    /// Writes the same rotation vector into every element column that
    /// addresses `i_node`, keeping shared 3-node boundary columns
    /// consistent
    pub fn set_node_psi(&mut self, i_node: usize, psi: [f64; 3]) {
        let k = self.topology.nodes_per_element();
        for i_elem in 0..self.n_elems {
            for i_local in 0..k {
                if i_elem * (k - 1) + i_local == i_node {
                    let mut col = self.psi.col_mut(i_elem * k + i_local);
                    col[0] = psi[0];
                    col[1] = psi[1];
                    col[2] = psi[2];
                }
            }
        }
    }

    /// Writes the same rotation rate into every element column that
    /// addresses `i_node`
    pub fn set_node_psi_dot(&mut self, i_node: usize, psi_dot: [f64; 3]) {
        let k = self.topology.nodes_per_element();
        for i_elem in 0..self.n_elems {
            for i_local in 0..k {
                if i_elem * (k - 1) + i_local == i_node {
                    let mut col = self.psi_dot.col_mut(i_elem * k + i_local);
                    col[0] = psi_dot[0];
                    col[1] = psi_dot[1];
                    col[2] = psi_dot[2];
                }
            }
        }
    }
}

/// Velocity of the moving base frame, both components expressed in the
/// base frame itself. The angular velocity is inertial: its magnitude
/// does not depend on the frame it is projected in.
pub struct FrameState {
    /// Linear velocity of the base frame origin
    pub v: Col<f64>,
    /// Angular velocity of the base frame
    pub omega: Col<f64>,
}

impl FrameState {
    pub fn new(v: [f64; 3], omega: [f64; 3]) -> Self {
        Self {
            v: Col::from_fn(3, |i| v[i]),
            omega: Col::from_fn(3, |i| omega[i]),
        }
    }

    pub fn at_rest() -> Self {
        Self {
            v: Col::zeros(3),
            omega: Col::zeros(3),
        }
    }
}

/// Pose of the base frame relative to the inertial frame. Both members
/// are required together; a partially specified inertial frame is not
/// representable.
pub struct EarthFrame {
    /// Base frame origin in the inertial frame
    pub origin: Col<f64>,
    /// Rotation vector of the base frame attitude
    pub attitude: Col<f64>,
}

impl EarthFrame {
    pub fn new(origin: [f64; 3], attitude: [f64; 3]) -> Self {
        Self {
            origin: Col::from_fn(3, |i| origin[i]),
            attitude: Col::from_fn(3, |i| attitude[i]),
        }
    }
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
