//! Command-line entry point for running workflows.
//!
//! With no arguments it runs the data-quality demo over a sample batch.
//! `--data` and `--threshold` change the demo inputs; `--graph` and
//! `--state` run an arbitrary graph description instead.

use std::path::PathBuf;

use clap::Parser;
use stepgraph_cli::{load_run_inputs, run_quality, Error};

#[derive(Parser, Debug)]
#[command(name = "stepgraph")]
#[command(about = "Run a workflow graph and print its trace and final state")]
struct Args {
    /// Comma-separated integers fed to the demo pipeline as `data`.
    #[arg(long, value_delimiter = ',', default_value = "10,50,150,200,30")]
    data: Vec<i64>,

    /// Number of anomalies a finished demo run may still carry.
    #[arg(long, default_value_t = 0)]
    threshold: i64,

    /// Graph description JSON file (nodes, entry_point, edges, conditional_edges).
    #[arg(long, value_name = "FILE", requires = "state")]
    graph: Option<PathBuf>,

    /// Initial state JSON file for `--graph`.
    #[arg(long, value_name = "FILE", requires = "graph")]
    state: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    let outcome = match (&args.graph, &args.state) {
        (Some(graph), Some(state)) => {
            let (workflow, initial) = load_run_inputs(graph, state)?;
            workflow.run(initial).await
        }
        _ => run_quality(&args.data, args.threshold).await,
    };

    let report = match outcome {
        Ok(report) => report,
        Err(failure) => {
            for line in &failure.trace {
                eprintln!("{}", line);
            }
            eprintln!("error: {}", failure.error);
            std::process::exit(1);
        }
    };

    for line in &report.trace {
        println!("{}", line);
    }
    println!("---");
    println!("{}", serde_json::to_string_pretty(&report.final_state)?);

    Ok(())
}
