use std::path::Path;

use crate::association::AssociationMode;
use crate::scenario::{AssociationData, DataIndex, Scenario, SlsData};
use crate::scheduler::{Scheduler, TransmissionParams};

/// Scheduler that computes nothing.
///
/// Useful for checking the output layout of a sweep before paying for the
/// real computation.
pub struct NoopScheduler {}

impl NoopScheduler {
    pub fn new() -> Self {
        NoopScheduler {}
    }
}

impl Scheduler for NoopScheduler {
    fn compute_data_transmission(
        &mut self,
        _scenario: &Scenario,
        _mode: AssociationMode,
        _sta_combination: &[usize],
        _output_folder: &Path,
        _sls_data: &SlsData,
        _association_data: &AssociationData,
        _tx_params: &TransmissionParams,
        _data_index: &DataIndex,
    ) {
    }
}
