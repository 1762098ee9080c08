use itertools::Itertools;
use vtkio::model::*;

use crate::error::CouplingError;
use crate::grid::AeroGrid;

/// Coincident grid as an unstructured quad mesh with the grid point
/// velocities attached, for inspection in ParaView. Point order
/// follows the backing storage: chord row by chord row.
pub fn grid_as_vtk(grid: &AeroGrid, vels: &AeroGrid) -> Result<Vtk, CouplingError> {
    if vels.shape() != grid.shape() {
        return Err(CouplingError::GridShapeMismatch {
            expected: grid.shape(),
            found: vels.shape(),
        });
    }
    let (n_chord, n_span) = grid.shape();
    let n_quads = (n_chord - 1) * (n_span - 1);

    Ok(Vtk {
        version: Version { major: 4, minor: 2 },
        title: String::new(),
        byte_order: ByteOrder::LittleEndian,
        file_path: None,
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F64(
                grid.columns()
                    .col_iter()
                    .flat_map(|p| [p[0], p[1], p[2]])
                    .collect_vec(),
            ),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity: quad_connectivity(n_chord, n_span),
                    offsets: (1..=n_quads).map(|i| 4 * i as u64).collect_vec(),
                },
                types: vec![CellType::Quad; n_quads],
            },
            data: Attributes {
                point: vec![Attribute::DataArray(DataArrayBase {
                    name: "TranslationalVelocity".to_string(),
                    elem: ElementType::Vectors,
                    data: IOBuffer::F32(
                        vels.columns()
                            .col_iter()
                            .flat_map(|c| c.iter().map(|&v| v as f32).collect_vec())
                            .collect_vec(),
                    ),
                })],
                ..Default::default()
            },
        }),
    })
}

/// Quad vertex indices over the (chord, span) lattice, one
/// counter-clockwise quad per panel cell
fn quad_connectivity(n_chord: usize, n_span: usize) -> Vec<u64> {
    (0..n_chord - 1)
        .cartesian_product(0..n_span - 1)
        .flat_map(|(j, n)| {
            [
                (j * n_span + n) as u64,
                (j * n_span + n + 1) as u64,
                ((j + 1) * n_span + n + 1) as u64,
                ((j + 1) * n_span + n) as u64,
            ]
        })
        .collect_vec()
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
