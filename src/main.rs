use std::process::ExitCode;

use interview_feedback::config::{RunConfig, parse_args};
use interview_feedback::error::FeedbackError;
use interview_feedback::input::FsFeedbackStore;
use interview_feedback::logging::init_logging;
use interview_feedback::pipeline::{run_normalize, run_render};

fn main() -> ExitCode {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    init_logging();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> Result<(), FeedbackError> {
    match config {
        RunConfig::Render(render) => {
            let store = FsFeedbackStore::new(render.store.clone());
            if let Some(out) = run_render(&render, &store)? {
                print!("{out}");
            }
        }
        RunConfig::Normalize(normalize) => {
            println!("{}", run_normalize(&normalize)?);
        }
    }
    Ok(())
}
