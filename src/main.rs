use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use heic_batch::args::Args;
use heic_batch::converter::MagickConverter;
use heic_batch::processor::Processor;
use log::info;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let converter = MagickConverter::new(args.magick.clone());

    let processor = Processor::new(args.into_config())
        .context("Please check that you are passing the right source and destination paths")?;
    info!("Output directory: {}", processor.config().dest_dir.display());

    let summary = processor.run(&converter)?;
    info!(
        "Done: {} of {} photos sent to conversion in {} batches",
        summary.photos_pending, summary.photos_found, summary.batches_run
    );

    Ok(())
}
