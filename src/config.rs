use serde::Deserialize;

use crate::error::CouplingError;
use crate::section::Section;
use crate::state::{BeamState, FrameState};
use crate::topology::ElementTopology;

/// Reads a coupling input description from a YAML file
pub fn read_coupling_from_file(file_path: &str) -> Result<CouplingInput, CouplingError> {
    let yaml = std::fs::read_to_string(file_path)?;
    parse_coupling(&yaml)
}

/// Parses a coupling input description from YAML text
pub fn parse_coupling(yaml: &str) -> Result<CouplingInput, CouplingError> {
    Ok(serde_yaml::from_str(yaml)?)
}

#[derive(Debug, Deserialize)]
pub struct CouplingInput {
    pub surface: SurfaceInput,
    pub beam: BeamInput,
    #[serde(default)]
    pub frame: FrameInput,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceInput {
    /// Number of chordwise panels
    pub chordwise_panels: usize,
    /// Chord length
    pub chord: f64,
    /// Root twist angle (radians)
    #[serde(default)]
    pub twist: f64,
    /// Elastic axis position, semi-chords aft of mid-chord
    pub elastic_axis: f64,
}

#[derive(Debug, Deserialize)]
pub struct BeamInput {
    pub nodes_per_element: usize,
    pub num_nodes: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct FrameInput {
    /// Base frame linear velocity, in the base frame
    #[serde(default)]
    pub velocity: [f64; 3],
    /// Base frame angular velocity, in the base frame
    #[serde(default)]
    pub angular_velocity: [f64; 3],
}

impl CouplingInput {
    pub fn topology(&self) -> Result<ElementTopology, CouplingError> {
        ElementTopology::from_nodes_per_element(self.beam.nodes_per_element)
    }

    pub fn build_section(&self) -> Result<Section, CouplingError> {
        Section::chordwise(
            self.surface.chordwise_panels,
            self.surface.chord,
            self.surface.twist,
            self.surface.elastic_axis,
        )
    }

    /// Zeroed beam state with the configured topology and node count
    pub fn build_state(&self) -> Result<BeamState, CouplingError> {
        BeamState::new(self.topology()?, self.beam.num_nodes)
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState::new(self.frame.velocity, self.frame.angular_velocity)
    }
}

//------------------------------------------------------------------------------
// Tests
//------------------------------------------------------------------------------
