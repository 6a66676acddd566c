use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::{error, info};
use u_cpusched::config::{OutputFormat, SimulationConfig};
use u_cpusched::io::{load_workload, render_json, render_process_table, render_report};
use u_cpusched::logging::init_tracing;
use u_cpusched::scheduler::{SimulationResult, SimulationRunner};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let prog = args.first().map(String::as_str).unwrap_or("u-cpusched");
        eprintln!("Usage: {prog} <input_filename>");
        return ExitCode::from(1);
    }

    init_tracing();

    match run(&args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::from_env(input)?;
    let processes = load_workload(&config.input_path)?;
    info!(count = processes.len(), "workload loaded");

    let runner = SimulationRunner::new(processes);
    let results = runner.run_all(&config.policies)?;

    let report = match config.format {
        OutputFormat::Text => render_text(&results, config.show_processes),
        OutputFormat::Json => render_json(&results)? + "\n",
    };

    print!("{report}");
    fs::write(&config.output_path, &report)?;
    info!(path = %config.output_path.display(), "report written");
    Ok(())
}

fn render_text(results: &[SimulationResult], show_processes: bool) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&render_report(result));
        if show_processes {
            out.push_str(&render_process_table(result));
        }
    }
    out
}
