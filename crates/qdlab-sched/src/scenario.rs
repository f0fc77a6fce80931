//! Scenario model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Precomputed sector-level sweep measurements.
///
/// Passed through to the scheduler untouched.
#[derive(Debug, Clone, Default)]
pub struct SlsData(pub Value);

/// Precomputed association data for all (AP, STA) pairs.
///
/// Passed through to the scheduler untouched.
#[derive(Debug, Clone, Default)]
pub struct AssociationData(pub Value);

/// Index into the preprocessed datasets.
///
/// Passed through to the scheduler untouched.
#[derive(Debug, Clone, Default)]
pub struct DataIndex(pub Value);

/// Represents a deployment of access points and stations.
///
/// Node IDs are assigned contiguously: APs occupy `[0, nb_aps)` and stations
/// occupy `[nb_aps, nb_nodes)`. `nb_stas` is the number of stations scheduled
/// together in one run, which in the common case equals the full station
/// count.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub nb_aps: usize,
    pub nb_nodes: usize,
    pub nb_stas: usize,
    pub sls_data: SlsData,
    pub association_data: AssociationData,
    pub data_index: DataIndex,
}

#[derive(Debug, Serialize, Deserialize)]
struct YamlScenario {
    nb_aps: usize,
    nb_nodes: usize,
    nb_stas: usize,
    /// Path to the sector-level sweep dataset (JSON), relative to this file.
    sls_data: Option<String>,
    /// Path to the association dataset (JSON), relative to this file.
    association_data: Option<String>,
    /// Path to the data index (JSON), relative to this file.
    data_index: Option<String>,
}

impl Scenario {
    /// Creates a scenario with empty auxiliary datasets.
    pub fn new(nb_aps: usize, nb_nodes: usize, nb_stas: usize) -> Self {
        assert!(nb_aps >= 1, "Scenario must have at least one AP");
        assert!(
            nb_nodes > nb_aps,
            "Scenario must have at least one station ({} nodes for {} APs)",
            nb_nodes,
            nb_aps
        );
        assert!(
            nb_stas >= 1 && nb_stas <= nb_nodes - nb_aps,
            "Can't schedule {} stations out of {}",
            nb_stas,
            nb_nodes - nb_aps
        );
        Self {
            nb_aps,
            nb_nodes,
            nb_stas,
            sls_data: SlsData::default(),
            association_data: AssociationData::default(),
            data_index: DataIndex::default(),
        }
    }

    /// Total number of stations in the deployment.
    pub fn nb_stations(&self) -> usize {
        self.nb_nodes - self.nb_aps
    }

    /// The station-ID universe `[nb_aps, nb_nodes)` in increasing order.
    pub fn station_ids(&self) -> Vec<usize> {
        (self.nb_aps..self.nb_nodes).collect()
    }
}

/// Loads a scenario from a YAML file.
///
/// Dataset paths in the file are resolved relative to the file's directory.
pub fn read_scenario(file: &Path) -> Scenario {
    let yaml: YamlScenario =
        serde_yaml::from_str(&std::fs::read_to_string(file).unwrap_or_else(|_| panic!("Can't read file {}", file.display())))
            .unwrap_or_else(|_| panic!("Can't parse YAML from file {}", file.display()));

    let dir = file.parent().unwrap_or_else(|| Path::new("."));
    let mut scenario = Scenario::new(yaml.nb_aps, yaml.nb_nodes, yaml.nb_stas);
    if let Some(path) = yaml.sls_data {
        scenario.sls_data = SlsData(read_dataset(&dir.join(path)));
    }
    if let Some(path) = yaml.association_data {
        scenario.association_data = AssociationData(read_dataset(&dir.join(path)));
    }
    if let Some(path) = yaml.data_index {
        scenario.data_index = DataIndex(read_dataset(&dir.join(path)));
    }
    scenario
}

fn read_dataset(file: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(file).unwrap_or_else(|_| panic!("Can't read file {}", file.display())))
        .unwrap_or_else(|_| panic!("Can't parse JSON from file {}", file.display()))
}
