use aeromap::{
    config::parse_coupling,
    coupling::{calculate_grid_motion, calculate_nodal_loads},
    grid::{AeroGrid, BeamLoads},
    state::EarthFrame,
    vtk::grid_as_vtk,
};

const INPUT: &str = r#"
surface:
  chordwise_panels: 8
  chord: 1.0
  twist: 0.0873
  elastic_axis: -0.5
beam:
  nodes_per_element: 3
  num_nodes: 11
frame:
  velocity: [0.0, 0.0, 0.0]
  angular_velocity: [0.0, 0.0, 0.3]
"#;

fn main() {
    let input = parse_coupling(INPUT).unwrap();
    let section = input.build_section().unwrap();
    let mut state = input.build_state().unwrap();
    let frame = input.frame_state();

    // Straight wing along x with a steady plunge rate
    let n_nodes = state.num_nodes();
    for i in 0..n_nodes {
        state.pos.col_mut(i)[0] = i as f64;
        state.pos_dot.col_mut(i)[2] = 0.1;
    }

    //--------------------------------------------------------------------------
    // Coincident grid in the base frame
    //--------------------------------------------------------------------------

    let n_chord = section.num_points();
    let mut grid = AeroGrid::new(n_chord, n_nodes);
    let mut vels = AeroGrid::new(n_chord, n_nodes);
    calculate_grid_motion(&state, &section, &frame, None, &mut grid, &mut vels).unwrap();

    grid_as_vtk(&grid, &vels)
        .unwrap()
        .export_ascii("wing_grid.vtk")
        .unwrap();
    println!("grid: {} x {} points -> wing_grid.vtk", n_chord, n_nodes);

    //--------------------------------------------------------------------------
    // Same grid re-expressed in the earth frame
    //--------------------------------------------------------------------------

    let earth = EarthFrame::new([0., 0., 100.], [0., 0.1745, 0.]);
    calculate_grid_motion(&state, &section, &frame, Some(&earth), &mut grid, &mut vels).unwrap();

    grid_as_vtk(&grid, &vels)
        .unwrap()
        .export_ascii("wing_grid_earth.vtk")
        .unwrap();
    println!("earth-frame grid -> wing_grid_earth.vtk");

    //--------------------------------------------------------------------------
    // Lump a uniform unit lift back onto the beam nodes
    //--------------------------------------------------------------------------

    let mut forces = AeroGrid::new(n_chord, n_nodes);
    for j in 0..n_chord {
        for n in 0..n_nodes {
            forces.point_mut(j, n)[2] = 1.;
        }
    }
    let mut loads = BeamLoads::new(n_nodes);
    calculate_nodal_loads(&state, &section, &forces, &mut loads).unwrap();

    let total_fz: f64 = (0..n_nodes).map(|n| loads.force(n)[2]).sum();
    println!("total lumped lift: {total_fz}");
    for n in 0..n_nodes {
        let f = loads.force(n);
        let m = loads.moment(n);
        println!(
            "node {n:2}  f = [{:9.4} {:9.4} {:9.4}]  m = [{:9.4} {:9.4} {:9.4}]",
            f[0], f[1], f[2], m[0], m[1], m[2]
        );
    }
}
