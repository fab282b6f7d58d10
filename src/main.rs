use anyhow::Result;
use env_logger::Env;
use log::debug;
use thinfilm::output::Report;
use thinfilm::settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let settings = settings::load_config()?;
    debug!("{}", settings);

    let report = Report::compute(&settings)?;
    if settings.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
