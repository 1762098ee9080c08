use crate::error::CouplingError;

/// Element topology of the beam discretization.
///
/// Beams are assembled from 2-node elements, where neighboring elements
/// meet at a node but store it independently, or 3-node elements, where
/// the boundary nodes are shared and only the middle node is interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTopology {
    TwoNode,
    ThreeNode,
}

impl ElementTopology {
    pub fn from_nodes_per_element(k: usize) -> Result<Self, CouplingError> {
        match k {
            2 => Ok(Self::TwoNode),
            3 => Ok(Self::ThreeNode),
            _ => Err(CouplingError::UnsupportedElementOrder(k)),
        }
    }

    pub fn nodes_per_element(&self) -> usize {
        match self {
            Self::TwoNode => 2,
            Self::ThreeNode => 3,
        }
    }

    /// Number of elements in a beam of `n_nodes` nodes
    pub fn num_elements(&self, n_nodes: usize) -> usize {
        (n_nodes - 1) / (self.nodes_per_element() - 1)
    }

    /// Maps a global node index to its (element, local node) pair.
    ///
    /// The first node is always local node 0 of element 0 and the last
    /// node is always the final local node of the last element. For
    /// 3-node elements, odd global indices are the middle local node
    /// and shared boundary nodes resolve to local node 0 of the element
    /// on their right.
    pub fn locate(&self, i_node: usize, n_nodes: usize) -> (usize, usize) {
        let k = self.nodes_per_element();

        let i_elem = if i_node == 0 {
            0
        } else if i_node < n_nodes - 1 {
            i_node / (k - 1)
        } else {
            (i_node - 1) / (k - 1)
        };

        let i_local = match self {
            Self::TwoNode => {
                if i_node == n_nodes - 1 {
                    1
                } else {
                    0
                }
            }
            Self::ThreeNode => {
                if i_node == n_nodes - 1 {
                    2
                } else if i_node % 2 == 1 {
                    1
                } else {
                    0
                }
            }
        };

        (i_elem, i_local)
    }
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
