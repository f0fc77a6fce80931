use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Builder;

use qdlab_sched::experiment::Experiment;
use qdlab_sched::scheduler::default_scheduler_resolver;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Runs batch downlink scheduling experiment over a Q-D scenario
struct Args {
    /// Path to YAML file with experiment configuration
    #[arg(short, long)]
    config: PathBuf,

    /// Path to produced JSON file with experiment results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads to use (runs are sequential by default)
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

fn main() -> std::io::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();

    let experiment = Experiment::load(&args.config, default_scheduler_resolver);

    let results = experiment.run(args.threads);

    std::fs::File::create(args.output.unwrap_or_else(|| {
        args.config
            .with_file_name([args.config.file_stem().unwrap().to_str().unwrap(), "-results"].concat())
            .with_extension("json")
    }))?
    .write_all(serde_json::to_string_pretty(&results).unwrap().as_bytes())
}
