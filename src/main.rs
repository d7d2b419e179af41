use clap::Parser;
use raysource::{
    beam_document::BeamDocument,
    console::{Args, OutputFormat},
    error::SourceResult,
    output::{write_csv, write_summary},
};
use std::io::{self, Write};

fn main() -> SourceResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    //parse CLI arguments
    let args = Args::parse();

    //read beam document from file
    let mut document = BeamDocument::from_file(&args.file_path)?;
    if let Some(seed) = args.seed {
        document.set_random_seed(seed);
    }
    let beams = document.generate_all()?;

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Summary => write_summary(&mut stdout, &beams)?,
        OutputFormat::Csv => write_csv(&mut stdout, &beams)?,
    }
    let _ = stdout.flush();
    Ok(())
}
