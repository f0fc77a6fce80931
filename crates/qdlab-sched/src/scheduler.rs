//! Scheduler contract.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::association::AssociationMode;
use crate::scenario::{AssociationData, DataIndex, Scenario, SlsData};
use crate::schedulers::noop::NoopScheduler;
use crate::schedulers::trace::TraceScheduler;

/// Transmission configuration consumed by the scheduler.
///
/// The driver never interprets these parameters, it only forwards them.
/// Values are stored as strings and parsed on access, so schedulers read
/// them via [get](TransmissionParams::get) with the type they expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransmissionParams {
    params: BTreeMap<String, String>,
}

impl TransmissionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<String>, V: ToString>(&mut self, name: K, value: V) {
        self.params.insert(name.into(), value.to_string());
    }

    pub fn get<T: FromStr, K: AsRef<str>>(&self, name: K) -> Option<T> {
        self.params.get(name.as_ref()).and_then(|s| s.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl std::fmt::Display for TransmissionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.params.iter().map(|(k, v)| format!("{k}={v}")).join(","))
    }
}

/// Computes downlink data transmission results for one experiment run and
/// persists them under the run's output folder.
///
/// Implementations own everything written below `output_folder`; the driver
/// guarantees the folder exists before the call.
pub trait Scheduler {
    #[allow(clippy::too_many_arguments)]
    fn compute_data_transmission(
        &mut self,
        scenario: &Scenario,
        mode: AssociationMode,
        sta_combination: &[usize],
        output_folder: &Path,
        sls_data: &SlsData,
        association_data: &AssociationData,
        tx_params: &TransmissionParams,
        data_index: &DataIndex,
    );
}

/// Resolves the schedulers bundled with this crate by name.
///
/// Embedding code with its own scheduler implementations supplies its own
/// resolver to [Experiment](crate::experiment::Experiment).
pub fn default_scheduler_resolver(name: &str) -> Option<Rc<RefCell<dyn Scheduler>>> {
    match name {
        "Noop" => Some(Rc::new(RefCell::new(NoopScheduler::new()))),
        "Trace" => Some(Rc::new(RefCell::new(TraceScheduler::new()))),
        _ => None,
    }
}
