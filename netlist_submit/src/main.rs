use anyhow::{Error, Result};
use netlist_submit::prelude::*;
use netlist_submit::{Report, run_presets};
use solver_client::HttpSolverClient;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

const USAGE: &str = "usage: netlist_submit <preset|netlist.json|--all> [solver_url]";

/// Pause between smoke run requests
const SMOKE_PAUSE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = std::env::args().collect::<Vec<_>>();
    let Some(target) = args.get(1) else {
        eprintln!("{USAGE}");
        eprintln!("presets:");
        for preset in &netlist_model::presets::PRESETS {
            eprintln!("  {:<8} {}", preset.name, preset.description);
        }
        return Ok(ExitCode::from(2));
    };

    let mut config = SubmitConfig::from_env()?;
    if let Some(url) = args.get(2) {
        config.solver_url = url.clone();
    }
    let client = HttpSolverClient::new(config.solver_url.clone(), config.timeout())?;
    info!("Solver: {}", client.url());

    if target == "--all" {
        return Ok(smoke_run(&client, &config).await);
    }

    let mut session = Session::new(config);
    if target.ends_with(".json") {
        let contents = std::fs::read_to_string(Path::new(target))?;
        netlist_model::load_netlist_json(session.builder_mut(), &contents)?;
    } else if !session.load_preset(target) {
        return Err(Error::msg(format!("Unknown preset: {target}")));
    }
    print!("{}", session.builder().document());

    match session.submit(&client).await {
        Ok(response) => {
            print!("{}", Report(&response));
            Ok(ExitCode::SUCCESS)
        }
        Err(SubmitError::Validation(messages)) => {
            eprintln!("Fix the following before submitting:");
            for m in messages {
                eprintln!("  {m}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn smoke_run(client: &HttpSolverClient, config: &SubmitConfig) -> ExitCode {
    let outcomes = run_presets(client, config, SMOKE_PAUSE).await;
    for o in &outcomes {
        match &o.failure {
            None => println!("PASS  {}", o.preset),
            Some(reason) => println!("FAIL  {}: {reason}", o.preset),
        }
    }
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    println!(
        "Total: {} | Passed: {passed} | Failed: {}",
        outcomes.len(),
        outcomes.len() - passed
    );
    if passed == outcomes.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
