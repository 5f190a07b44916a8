extern crate swapcard_harvest;
extern crate failure;
#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Env, Target};
use failure::Error;
use swapcard_harvest::config::HarvestConfig;
use swapcard_harvest::harvest::{run, HarvestReport};

fn harvest() -> Result<HarvestReport, Error> {
    let config = HarvestConfig::from_env()?;
    info!("Harvesting view {} of event {} into {}", config.view_id, config.event_id, config.output_dir.display());
    run(&config)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    match harvest() {
        Ok(report) => info!("Done: {} page(s), {} attendee(s) collected", report.pages, report.attendees.len()),
        Err(e) => error!("An error occurred: {}", e)
    }
}
