use anyhow::Context;
use simplelog::*;
use writetime::logger;

fn main() -> anyhow::Result<()> {
    TermLogger::init(LevelFilter::Warn, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let cfg = logger::Config::default();
    logger::run(&cfg).context("Program terminated with an error")?;

    println!("Successfully appended log to {}.", cfg.path.display());
    Ok(())
}
