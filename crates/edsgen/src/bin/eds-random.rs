use std::io::Write;
use std::path::PathBuf;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

use eds_alphabet::Alphabet;
use eds_generator::EdsGenerator;
use eds_generator::GeneratedEds;
use eds_generator::GeneratorConfig;

use edsgen::alphabet_parsers::AlphabetArguments;
use edsgen::generator_parsers::GeneratorArguments;
use edsgen::output::RunSummary;
use edsgen::output::check_output_path;
use edsgen::output::decorated_filename;
use edsgen::output::numbered_filename;
use edsgen::output::write_eds;
use edsgen::output::write_summaries;

#[derive(Debug, Parser)]
#[command(name = "eds-random")]
#[command(author, version, about = "Random elastic degenerate string generator")]
pub struct Cli {
    /// Output file for the generated EDS
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Append parameters and file type to the output filename
    #[arg(long, action = ArgAction::SetTrue)]
    decorate_output: bool,

    /// Seed for the random number generator (drawn at random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent strings, written to OUTPUT_0, OUTPUT_1, ...
    /// All output paths are checked before the first file is written; an
    /// I/O error while writing keeps the files written before it.
    #[arg(long, default_value_t = 1)]
    num: usize,

    /// Write a JSON summary of all generated files.
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten, next_help_heading = "Alphabet parameters")]
    alphabet: AlphabetArguments,

    #[command(flatten, next_help_heading = "EDS target")]
    generator: GeneratorArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn print_settings(cli: &Cli, alphabet: &Alphabet, config: &GeneratorConfig, seed: u64) {
    let cap = |c: Option<usize>| c.map_or("none".to_string(), |c| c.to_string());
    let length = &config.settings.element_length;
    let size = &config.settings.cardinality;

    println!("{}", format!("Random EDS string generator {}", env!("CARGO_PKG_VERSION")).yellow());
    println!("  EDS length: {:?}", cli.generator.target.length);
    println!("  EDS size: {:?}", cli.generator.target.size);
    println!("  Alphabet: {:?} [{}]", cli.alphabet.alphabet, alphabet);
    println!("  Weights: {:?} {:?}", cli.alphabet.freq_file, alphabet.weights());
    println!("  Degenerate segment probability: {}", config.degenerate_probability);
    println!("  Recursive segment probability: {}", config.recursive_probability);
    println!("  Maximum recursive depth: {}", config.max_depth);
    println!("  Segment size - gauss distribution average: {}", size.mean());
    println!("  Segment size - gauss distribution standard deviation: {}", size.stdev());
    println!("  Segment size - maximum: {}", cap(size.cap()));
    println!("  Segment size - force minimum segment size of 2: {}", config.force_min_size);
    println!("  Element length - gauss distribution average: {}", length.mean());
    println!("  Element length - gauss distribution standard deviation: {}", length.stdev());
    println!("  Element length - maximum: {}", cap(length.cap()));
    println!("  Random seed: {}", seed.to_string().green());
    println!("  EDS output file: {}", cli.output);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.num == 0 {
        bail!("--num must be at least 1");
    }

    // Everything is validated before the first symbol is drawn.
    let alphabet = cli.alphabet.build_alphabet()?;
    let config = cli.generator.build_config()?;
    let generator = EdsGenerator::new(&alphabet, &config)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    print_settings(&cli, &alphabet, &config, seed);

    let runs: Vec<GeneratedEds> = if cli.num == 1 {
        vec![generator.generate(&mut StdRng::seed_from_u64(seed))]
    } else {
        let pb = ProgressBar::new(cli.num as u64);
        pb.set_style(
            ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
        );
        let runs: Vec<GeneratedEds> = (0..cli.num)
            .into_par_iter()
            .map_init(
                || pb.clone(),
                |pb, i| {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                    let eds = generator.generate(&mut rng);
                    pb.inc(1);
                    eds
                },
            ).collect();
        pb.finish_with_message("All strings generated!");
        runs
    };

    let paths: Vec<String> = runs.iter().enumerate()
        .map(|(i, eds)| {
            let base = numbered_filename(&cli.output, i, cli.num);
            if cli.decorate_output {
                decorated_filename(&base, &config, eds)
            } else {
                base
            }
        })
        .collect();
    for path in &paths {
        check_output_path(path)?;
    }
    if let Some(path) = &cli.summary {
        check_output_path(path)?;
    }

    let mut summaries = Vec::with_capacity(runs.len());
    for (i, (eds, path)) in runs.iter().zip(paths).enumerate() {
        if cli.decorate_output {
            println!("  EDS output file decorated: {}", path);
        }

        write_eds(&path, eds).with_context(|| format!("Failed to write '{}'", path))?;
        info!("{} length={} size={} bytes={} degenerate={}",
            path.cyan(), eds.length, eds.size, eds.text.len(), eds.degenerate_segments);

        let run_seed = seed.wrapping_add(i as u64);
        summaries.push(RunSummary::new(path, run_seed, &alphabet, &config, eds));
    }

    if let Some(path) = &cli.summary {
        write_summaries(path, &summaries)?;
        info!("Summary written to {}", path.display());
    }

    Ok(())
}
