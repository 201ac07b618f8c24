mod cli;
mod creator;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // .env is optional, real environment variables take precedence
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
