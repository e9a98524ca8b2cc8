use anyhow::Result;
use std::process;
use log::error;
use authz_plugin_info::{app, cli, logging};

fn main() {
    match run() {
        Ok(0) => {}
        Ok(failures) => {
            eprintln!("{} plugin(s) failed to build", failures);
            process::exit(1);
        }
        Err(e) => {
            error!("Application error: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<usize> {
    let args = cli::parse_args();

    cli::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(app::build_and_report(&args, &config_manager, &mut out))
}
