use std::f64::consts::PI;

use approx::assert_relative_eq;
use faer::{Col, Mat};

use aeromap::{
    coupling::calculate_grid_motion,
    grid::AeroGrid,
    section::Section,
    state::{BeamState, EarthFrame, FrameState},
    topology::ElementTopology,
    util::{cross, rotation_vector_as_matrix},
};

fn straight_beam(topology: ElementTopology, n_nodes: usize) -> BeamState {
    let mut state = BeamState::new(topology, n_nodes).unwrap();
    for i in 0..n_nodes {
        state.pos.col_mut(i)[0] = i as f64;
    }
    state
}

#[test]
fn test_identity_mapping() {
    // Zero rotations and a quiescent base frame: grid points are the
    // nodal positions plus the raw section offsets, velocities are the
    // nodal velocities
    let n_nodes = 5;
    let mut state = straight_beam(ElementTopology::ThreeNode, n_nodes);
    for i in 0..n_nodes {
        let mut v = state.pos_dot.col_mut(i);
        v[0] = 0.1;
        v[1] = 0.2;
        v[2] = 0.3;
    }
    let section = Section::chordwise(4, 1., 0., -0.5).unwrap();
    let frame = FrameState::at_rest();

    let n_chord = section.num_points();
    let mut grid = AeroGrid::new(n_chord, n_nodes);
    let mut vels = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(&state, &section, &frame, None, &mut grid, &mut vels).unwrap();

    for n in 0..n_nodes {
        for j in 0..n_chord {
            let p = grid.point(j, n);
            assert_relative_eq!(p[0], n as f64 + section.points[(0, j)], epsilon = 1e-14);
            assert_relative_eq!(p[1], section.points[(1, j)], epsilon = 1e-14);
            assert_relative_eq!(p[2], section.points[(2, j)], epsilon = 1e-14);

            let v = vels.point(j, n);
            assert_relative_eq!(v[0], 0.1, epsilon = 1e-14);
            assert_relative_eq!(v[1], 0.2, epsilon = 1e-14);
            assert_relative_eq!(v[2], 0.3, epsilon = 1e-14);
        }
    }
}

#[test]
fn test_rigid_quarter_turn_rotates_offsets_only() {
    // A 90 degree roll at every node rotates each section offset while
    // the node positions stay put
    let n_nodes = 5;
    let mut state = straight_beam(ElementTopology::ThreeNode, n_nodes);
    for i in 0..n_nodes {
        state.set_node_psi(i, [PI / 2., 0., 0.]);
    }
    let section = Section::chordwise(2, 1., 0., 0.).unwrap();
    let frame = FrameState::at_rest();

    let n_chord = section.num_points();
    let mut grid = AeroGrid::new(n_chord, n_nodes);
    let mut vels = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(&state, &section, &frame, None, &mut grid, &mut vels).unwrap();

    for n in 0..n_nodes {
        for j in 0..n_chord {
            let p = grid.point(j, n);
            // (0, y, 0) -> (0, 0, y) about the beam axis
            assert_relative_eq!(p[0], n as f64, epsilon = 1e-14);
            assert_relative_eq!(p[1], 0., epsilon = 1e-12);
            assert_relative_eq!(p[2], section.points[(1, j)], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_rigid_body_velocity_composition() {
    // Zero rotation parameters make the composition transparent:
    // omega_b = psi_dot + omega_a, and every term can be written down
    // by hand
    let n_nodes = 3;
    let mut state = straight_beam(ElementTopology::ThreeNode, n_nodes);
    for i in 0..n_nodes {
        let mut v = state.pos_dot.col_mut(i);
        v[1] = 0.1;
        state.set_node_psi_dot(i, [0.2, 0., 0.]);
    }
    let frame = FrameState::new([1., 2., 3.], [0., 0., 0.5]);
    let section = Section::chordwise(1, 1., 0., 0.).unwrap();

    let n_chord = section.num_points();
    let mut grid = AeroGrid::new(n_chord, n_nodes);
    let mut vels = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(&state, &section, &frame, None, &mut grid, &mut vels).unwrap();

    let mut omega_x_pos = Col::<f64>::zeros(3);
    let mut spin = Col::<f64>::zeros(3);
    let omega_b = Col::<f64>::from_fn(3, |i| [0.2, 0., 0.5][i]);

    for n in 0..n_nodes {
        cross(
            frame.omega.as_ref(),
            state.pos.col(n),
            omega_x_pos.as_mut(),
        );
        for j in 0..n_chord {
            cross(omega_b.as_ref(), section.points.col(j), spin.as_mut());
            let v = vels.point(j, n);
            assert_relative_eq!(v[0], 1. + omega_x_pos[0] + spin[0], epsilon = 1e-13);
            assert_relative_eq!(v[1], 2. + omega_x_pos[1] + 0.1 + spin[1], epsilon = 1e-13);
            assert_relative_eq!(v[2], 3. + omega_x_pos[2] + spin[2], epsilon = 1e-13);
        }
    }
}

#[test]
fn test_earth_frame_re_expression() {
    // Supplying origin and attitude re-expresses the whole grid:
    // positions shift and rotate, velocities only rotate
    let n_nodes = 3;
    let mut state = straight_beam(ElementTopology::TwoNode, n_nodes);
    for i in 0..n_nodes {
        state.pos_dot.col_mut(i)[2] = 0.4;
        state.set_node_psi(i, [0., 0.1, -0.2]);
    }
    let section = Section::chordwise(2, 1., 0.05, -0.5).unwrap();
    let frame = FrameState::new([0.5, 0., 0.], [0., 0., 0.2]);

    let n_chord = section.num_points();
    let mut grid_a = AeroGrid::new(n_chord, n_nodes);
    let mut vels_a = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(&state, &section, &frame, None, &mut grid_a, &mut vels_a).unwrap();

    let earth = EarthFrame::new([10., -2., 30.], [0., 0., PI / 2.]);
    let mut grid_g = AeroGrid::new(n_chord, n_nodes);
    let mut vels_g = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(
        &state,
        &section,
        &frame,
        Some(&earth),
        &mut grid_g,
        &mut vels_g,
    )
    .unwrap();

    let mut c_ga = Mat::<f64>::zeros(3, 3);
    rotation_vector_as_matrix(earth.attitude.as_ref(), c_ga.as_mut());

    for n in 0..n_nodes {
        for j in 0..n_chord {
            let rotated = &c_ga * grid_a.point(j, n).to_owned();
            let expected_p = &rotated + &earth.origin;
            let expected_v = &c_ga * vels_a.point(j, n).to_owned();
            let p = grid_g.point(j, n);
            let v = vels_g.point(j, n);
            for c in 0..3 {
                assert_relative_eq!(p[c], expected_p[c], epsilon = 1e-13);
                assert_relative_eq!(v[c], expected_v[c], epsilon = 1e-13);
            }
        }
    }
}

#[test]
fn test_two_and_three_node_topologies_agree_on_uniform_state() {
    // The same physical beam described with either element topology
    // produces the same grid when the rotation field is uniform
    let n_nodes = 5;
    let section = Section::chordwise(3, 1., 0.1, 0.).unwrap();
    let frame = FrameState::at_rest();

    let mut results = vec![];
    for topology in [ElementTopology::TwoNode, ElementTopology::ThreeNode] {
        let mut state = straight_beam(topology, n_nodes);
        for i in 0..n_nodes {
            state.set_node_psi(i, [0.3, -0.1, 0.2]);
        }
        let n_chord = section.num_points();
        let mut grid = AeroGrid::new(n_chord, n_nodes);
        let mut vels = AeroGrid::new(n_chord, n_nodes);
        calculate_grid_motion(&state, &section, &frame, None, &mut grid, &mut vels).unwrap();
        results.push(grid);
    }

    for n in 0..n_nodes {
        for j in 0..section.num_points() {
            let a = results[0].point(j, n);
            let b = results[1].point(j, n);
            for c in 0..3 {
                assert_relative_eq!(a[c], b[c], epsilon = 1e-14);
            }
        }
    }
}
