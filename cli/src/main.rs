mod commands;
mod terminal;

use std::env;
use std::process::ExitCode;

use commands::{CommandLine, PROVIDER_ENV, discover, exit_status};
use netdiscover_core::{DiscoveryContext, discoverer_for};
use terminal::logging;

fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args() {
        Ok(commands) => commands,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(exit_status(&err));
        }
    };

    let cfg = match commands.config(env::var(PROVIDER_ENV).ok()) {
        Ok(cfg) => cfg,
        Err(err) => {
            println!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(cfg.debug);

    let discoverer = discoverer_for(cfg.provider, DiscoveryContext::system(&cfg));

    match commands.field {
        Some(field) => discover::single(&discoverer, field),
        None => discover::full(&discoverer),
    }
}
