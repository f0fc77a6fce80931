//! Tool for running batch scheduling experiments.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use enum_iterator::IntoEnumIterator;
use log::info;
use serde::{Deserialize, Serialize};
use threadpool::ThreadPool;

use crate::association::AssociationMode;
use crate::combinations::station_combinations;
use crate::output::{combination_folder, ensure_folder};
use crate::scenario::{read_scenario, Scenario};
use crate::scheduler::{Scheduler, TransmissionParams};

/// Contains result of one run.
#[derive(Serialize, Debug)]
pub struct RunResult {
    pub association_mode: String,
    pub sta_combination: Vec<usize>,
    pub scheduler: String,
    pub output_folder: String,
    /// Wall-clock duration of the scheduler call in seconds.
    pub time: f64,
}

#[derive(Deserialize)]
struct ExperimentConfig {
    /// Path to the scenario YAML file.
    scenario: PathBuf,
    /// Scheduler name, resolved through the scheduler resolver.
    scheduler: String,
    /// Root of the output tree. Defaults to the working directory.
    output_path: Option<PathBuf>,
    /// Combination sizes to sweep. Defaults to the scenario's `nb_stas`.
    subset_sizes: Option<Vec<usize>>,
    transmission: Option<TransmissionParams>,
}

struct Run {
    mode: AssociationMode,
    sta_combination: Vec<usize>,
    folder: PathBuf,
}

/// Enumerates the experiment space of a scenario and executes one scheduler
/// invocation per point.
///
/// The space is every association mode crossed with every station
/// combination of the requested subset sizes. Each point gets its own output
/// folder, created before the scheduler call that writes into it.
pub struct Experiment {
    scenario: Arc<Scenario>,
    transmission: TransmissionParams,
    scheduler_name: String,
    runs: Vec<Run>,
    scheduler_resolver: fn(&str) -> Option<Rc<RefCell<dyn Scheduler>>>,
}

impl Experiment {
    pub fn new(
        scenario: Scenario,
        transmission: TransmissionParams,
        scheduler: &str,
        output_path: &Path,
        subset_sizes: Option<Vec<usize>>,
        scheduler_resolver: fn(&str) -> Option<Rc<RefCell<dyn Scheduler>>>,
    ) -> Self {
        if scheduler_resolver(scheduler).is_none() {
            panic!("Can't resolve scheduler {}", scheduler);
        }

        let mut sizes = subset_sizes.unwrap_or_else(|| vec![scenario.nb_stas]);
        sizes.sort_unstable();
        sizes.dedup();
        for &size in sizes.iter() {
            assert!(
                size >= 1 && size <= scenario.nb_stations(),
                "Can't draw {} stations out of {}",
                size,
                scenario.nb_stations()
            );
        }

        let station_ids = scenario.station_ids();
        let mut runs = Vec::new();
        for mode in AssociationMode::into_enum_iter() {
            for &size in sizes.iter() {
                for sta_combination in station_combinations(&station_ids, size) {
                    let folder = combination_folder(output_path, mode, &sta_combination, scenario.nb_stations());
                    runs.push(Run {
                        mode,
                        sta_combination,
                        folder,
                    });
                }
            }
        }

        Self {
            scenario: Arc::new(scenario),
            transmission,
            scheduler_name: scheduler.to_string(),
            runs,
            scheduler_resolver,
        }
    }

    /// Loads an experiment from a YAML config file.
    pub fn load(config_path: &Path, scheduler_resolver: fn(&str) -> Option<Rc<RefCell<dyn Scheduler>>>) -> Self {
        let config: ExperimentConfig = serde_yaml::from_str(
            &std::fs::read_to_string(config_path)
                .unwrap_or_else(|_| panic!("Can't read config from file {}", config_path.display())),
        )
        .unwrap_or_else(|_| panic!("Can't parse YAML from file {}", config_path.display()));

        let scenario = read_scenario(&config.scenario);
        info!(
            "loaded scenario {}: {} APs, {} stations, {} scheduled together",
            config.scenario.display(),
            scenario.nb_aps,
            scenario.nb_stations(),
            scenario.nb_stas
        );

        Self::new(
            scenario,
            config.transmission.unwrap_or_default(),
            &config.scheduler,
            &config.output_path.unwrap_or_else(|| PathBuf::from(".")),
            config.subset_sizes,
            scheduler_resolver,
        )
    }

    /// Runs all experiment points.
    ///
    /// With one thread the points execute in enumeration order (association
    /// modes in declaration order, combinations in lexicographic order).
    /// With more threads each worker owns a distinct output folder, so no
    /// coordination beyond idempotent folder creation is needed; results are
    /// sorted back into enumeration order before returning.
    pub fn run(self, num_threads: usize) -> Vec<RunResult> {
        let total_runs = self.runs.len();
        info!(
            "running {} experiment points with scheduler {} on {} threads",
            total_runs, self.scheduler_name, num_threads
        );

        let finished_runs = Arc::new(AtomicUsize::new(0));
        let result = Arc::new(Mutex::new(Vec::with_capacity(total_runs)));

        let pool = ThreadPool::new(num_threads);
        let start_time = Instant::now();
        for run in self.runs.into_iter() {
            let finished_runs = finished_runs.clone();
            let result = result.clone();
            let scenario = self.scenario.clone();
            let transmission = self.transmission.clone();
            let scheduler_name = self.scheduler_name.clone();
            let scheduler_resolver = self.scheduler_resolver;
            pool.execute(move || {
                ensure_folder(&run.folder);

                let scheduler = scheduler_resolver(&scheduler_name)
                    .unwrap_or_else(|| panic!("Can't resolve scheduler {}", scheduler_name));

                let now = Instant::now();
                scheduler.borrow_mut().compute_data_transmission(
                    &scenario,
                    run.mode,
                    &run.sta_combination,
                    &run.folder,
                    &scenario.sls_data,
                    &scenario.association_data,
                    &transmission,
                    &scenario.data_index,
                );
                let time = now.elapsed().as_secs_f64();

                result.lock().unwrap().push(RunResult {
                    association_mode: run.mode.to_string(),
                    sta_combination: run.sta_combination,
                    scheduler: scheduler_name,
                    output_folder: run.folder.display().to_string(),
                    time,
                });

                finished_runs.fetch_add(1, Ordering::SeqCst);
                let finished = finished_runs.load(Ordering::SeqCst);

                let elapsed = start_time.elapsed();
                let remaining =
                    Duration::from_secs_f64(elapsed.as_secs_f64() / finished as f64 * (total_runs - finished) as f64);
                print!("\r{}", " ".repeat(70));
                print!(
                    "\rFinished {}/{} [{}%] runs in {:.2?}, remaining time: {:.2?}",
                    finished,
                    total_runs,
                    (finished as f64 * 100. / total_runs as f64).round() as i32,
                    elapsed,
                    remaining
                );
                std::io::stdout().flush().unwrap();
            });
        }

        pool.join();

        print!("\r{}", " ".repeat(70));
        println!("\rFinished {} runs in {:.2?}", total_runs, start_time.elapsed());

        let mut result = Arc::try_unwrap(result).unwrap().into_inner().unwrap();
        result.sort_by(|a, b| {
            (a.association_mode.as_str(), a.sta_combination.len(), &a.sta_combination).cmp(&(
                b.association_mode.as_str(),
                b.sta_combination.len(),
                &b.sta_combination,
            ))
        });
        result
    }
}
