use faer::{Col, Mat};

use crate::error::CouplingError;
use crate::grid::{AeroGrid, BeamLoads};
use crate::section::Section;
use crate::state::{BeamState, EarthFrame, FrameState};
use crate::util::{cross, rotation_vector_as_matrix, tangential_matrix};

/// Builds the aerodynamic grid coincident with the deformed beam and
/// the inertial velocity of every grid point, overwriting `grid` and
/// `vels` in place.
///
/// Grid point `(j, n)` is beam node `n` translated by section offset
/// `j` rotated into the base frame. Its velocity composes the base
/// frame motion, the nodal velocity, and the spin of the cross section
/// about the node:
///
/// ```text
/// grid[j,n] = pos[n] + C * section[j]
/// vel[j,n]  = v_a + omega_a x pos[n] + pos_dot[n]
///             + C * (omega_b x section[j])
/// ```
///
/// where `C` rotates the node's cross-section frame into the base
/// frame and `omega_b = T(psi) * psi_dot + C^T * omega_a` is the
/// inertial angular velocity of the cross section in its own frame;
/// both contributions are inertial angular velocities, so they sum
/// directly once projected into a common frame.
///
/// With an `EarthFrame`, a second pass re-expresses every position as
/// `origin + C_ga * grid[j,n]` and every velocity as `C_ga * vel[j,n]`.
pub fn calculate_grid_motion(
    state: &BeamState,
    section: &Section,
    frame: &FrameState,
    earth: Option<&EarthFrame>,
    grid: &mut AeroGrid,
    vels: &mut AeroGrid,
) -> Result<(), CouplingError> {
    let n_nodes = state.num_nodes();
    let n_chord = section.num_points();
    check_grid_shape(grid, n_chord, n_nodes)?;
    check_grid_shape(vels, n_chord, n_nodes)?;

    let mut c_ab = Mat::<f64>::zeros(3, 3);
    let mut tan = Mat::<f64>::zeros(3, 3);
    let mut psi = Col::<f64>::zeros(3);
    let mut psi_dot = Col::<f64>::zeros(3);
    let mut omega_x_pos = Col::<f64>::zeros(3);
    let mut omega_x_sec = Col::<f64>::zeros(3);

    for i_node in 0..n_nodes {
        psi.copy_from(&state.node_psi(i_node));
        psi_dot.copy_from(&state.node_psi_dot(i_node));
        let pos = state.pos.col(i_node);
        let pos_dot = state.pos_dot.col(i_node);

        rotation_vector_as_matrix(psi.as_ref(), c_ab.as_mut());

        // Inertial angular velocity of the cross-section frame in its
        // own frame: local rotation rate plus the base-frame angular
        // velocity re-projected
        tangential_matrix(psi.as_ref(), tan.as_mut());
        let c_ba = c_ab.transpose().to_owned();
        let omega_local = &tan * &psi_dot;
        let omega_base = &c_ba * &frame.omega;
        let omega_b = &omega_local + &omega_base;

        // Base-frame rotation sweeps the node position
        cross(frame.omega.as_ref(), pos, omega_x_pos.as_mut());

        // Section offsets rotated into the base frame, all points at once
        let sec_a = &c_ab * &section.points;

        for j_chord in 0..n_chord {
            let offset_a = sec_a.col(j_chord);
            let mut p = grid.point_mut(j_chord, i_node);
            p[0] = pos[0] + offset_a[0];
            p[1] = pos[1] + offset_a[1];
            p[2] = pos[2] + offset_a[2];

            cross(
                omega_b.as_ref(),
                section.points.col(j_chord),
                omega_x_sec.as_mut(),
            );
            let spin_a = &c_ab * &omega_x_sec;
            let mut v = vels.point_mut(j_chord, i_node);
            v[0] = frame.v[0] + omega_x_pos[0] + pos_dot[0] + spin_a[0];
            v[1] = frame.v[1] + omega_x_pos[1] + pos_dot[1] + spin_a[1];
            v[2] = frame.v[2] + omega_x_pos[2] + pos_dot[2] + spin_a[2];
        }
    }

    if let Some(earth) = earth {
        let mut c_ga = Mat::<f64>::zeros(3, 3);
        rotation_vector_as_matrix(earth.attitude.as_ref(), c_ga.as_mut());

        for i_node in 0..n_nodes {
            for j_chord in 0..n_chord {
                let rotated = &c_ga * grid.point(j_chord, i_node).to_owned();
                let p_g = &rotated + &earth.origin;
                grid.point_mut(j_chord, i_node).copy_from(&p_g);

                let v_g = &c_ga * vels.point(j_chord, i_node).to_owned();
                vels.point_mut(j_chord, i_node).copy_from(&v_g);
            }
        }
    }

    Ok(())
}

/// Lumps aerodynamic grid forces into equivalent force/moment pairs at
/// the beam nodes, zeroing `beam_loads` first.
///
/// The moment arm for each grid point is the same rotated section
/// offset that places it in [`calculate_grid_motion`], which keeps
/// this operator the energetic adjoint of the displacement mapping:
/// virtual work is identical whether computed on the grid or on the
/// beam degrees of freedom.
///
/// No frame transform is applied to the force vectors themselves: the
/// aerodynamic forces are consumed in whatever frame the beam expects
/// its applied loads, even when the grid was exported in the inertial
/// frame. Reconciling the two frames is the caller's responsibility.
pub fn calculate_nodal_loads(
    state: &BeamState,
    section: &Section,
    aero_forces: &AeroGrid,
    beam_loads: &mut BeamLoads,
) -> Result<(), CouplingError> {
    let n_nodes = state.num_nodes();
    let n_chord = section.num_points();
    check_grid_shape(aero_forces, n_chord, n_nodes)?;
    if beam_loads.num_nodes() != n_nodes {
        return Err(CouplingError::LoadShapeMismatch {
            expected: n_nodes,
            found: beam_loads.num_nodes(),
        });
    }

    beam_loads.fill_zero();

    let mut c_ab = Mat::<f64>::zeros(3, 3);
    let mut psi = Col::<f64>::zeros(3);
    let mut arm_x_f = Col::<f64>::zeros(3);

    for i_node in 0..n_nodes {
        psi.copy_from(&state.node_psi(i_node));
        rotation_vector_as_matrix(psi.as_ref(), c_ab.as_mut());

        // Section offsets in the base frame, the lever arms
        let sec_a = &c_ab * &section.points;

        for j_chord in 0..n_chord {
            let f = aero_forces.point(j_chord, i_node);
            cross(sec_a.col(j_chord), f, arm_x_f.as_mut());

            let mut load = beam_loads.data.col_mut(i_node);
            load[0] += f[0];
            load[1] += f[1];
            load[2] += f[2];
            load[3] += arm_x_f[0];
            load[4] += arm_x_f[1];
            load[5] += arm_x_f[2];
        }
    }

    Ok(())
}

fn check_grid_shape(
    grid: &AeroGrid,
    n_chord: usize,
    n_span: usize,
) -> Result<(), CouplingError> {
    if grid.shape() != (n_chord, n_span) {
        return Err(CouplingError::GridShapeMismatch {
            expected: (n_chord, n_span),
            found: grid.shape(),
        });
    }
    Ok(())
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
