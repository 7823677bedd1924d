mod commands;
mod compositor;
mod data;
mod image;
mod inputs;
mod options;
mod output_name;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Compose(compose_options) => {
            commands::compose(options.global, compose_options)?;
        }
        Subcommand::Plan(plan_options) => {
            commands::plan(options.global, plan_options)?;
        }
    }

    Ok(())
}
