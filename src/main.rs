use clap::Parser;
use polished_wiki::{pipeline, CmdArgs, Config};
use std::io::Write;

fn main() {
    let args = CmdArgs::parse();

    let mut env_builder = env_logger::builder();
    env_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "({}) {} - {}",
                record.target(),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_default_env();
    env_builder.init();

    let result = Config::from_args(&args).and_then(|config| pipeline::run(&config));
    match result {
        Ok(data) => log::info!("Generated pages for {} creatures", data.records.len()),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}
