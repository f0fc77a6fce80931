use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::association::AssociationMode;
use crate::scenario::{AssociationData, DataIndex, Scenario, SlsData};
use crate::scheduler::{Scheduler, TransmissionParams};

#[derive(Serialize)]
struct RunManifest<'a> {
    association_mode: &'a str,
    sta_combination: &'a [usize],
    nb_aps: usize,
    nb_nodes: usize,
    nb_stas: usize,
    transmission: &'a TransmissionParams,
}

/// Scheduler that records each run into a `run.json` manifest inside the
/// run's output folder instead of computing transmissions.
pub struct TraceScheduler {}

impl TraceScheduler {
    pub fn new() -> Self {
        TraceScheduler {}
    }
}

impl Scheduler for TraceScheduler {
    fn compute_data_transmission(
        &mut self,
        scenario: &Scenario,
        mode: AssociationMode,
        sta_combination: &[usize],
        output_folder: &Path,
        _sls_data: &SlsData,
        _association_data: &AssociationData,
        tx_params: &TransmissionParams,
        _data_index: &DataIndex,
    ) {
        let manifest = RunManifest {
            association_mode: mode.label(),
            sta_combination,
            nb_aps: scenario.nb_aps,
            nb_nodes: scenario.nb_nodes,
            nb_stas: scenario.nb_stas,
            transmission: tx_params,
        };
        let file = output_folder.join("run.json");
        File::create(&file)
            .unwrap_or_else(|_| panic!("Can't create file {}", file.display()))
            .write_all(serde_json::to_string_pretty(&manifest).unwrap().as_bytes())
            .unwrap_or_else(|_| panic!("Can't write file {}", file.display()));
    }
}
