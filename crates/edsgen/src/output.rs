use std::fs;
use std::io;
use std::path::Path;
use anyhow::Result;
use anyhow::bail;
use serde::Serialize;

use eds_alphabet::Alphabet;
use eds_generator::GeneratedEds;
use eds_generator::GeneratorConfig;

/// Append the run parameters and the measured length/size to `base`,
/// e.g. `out_p=0.15000_r=0.00000_s=0005.00_e=0005.00_l=0000001000_N=0000002131.eds`.
pub fn decorated_filename(base: &str, config: &GeneratorConfig, eds: &GeneratedEds) -> String {
    format!("{}_p={:.5}_r={:.5}_s={:07.2}_e={:07.2}_l={:010}_N={:010}.eds",
        base,
        config.degenerate_probability,
        config.recursive_probability,
        config.settings.cardinality.mean(),
        config.settings.element_length.mean(),
        eds.length,
        eds.size,
    )
}

/// Batches of more than one run get an index suffix.
pub fn numbered_filename(base: &str, index: usize, total: usize) -> String {
    if total > 1 {
        format!("{}_{}", base, index)
    } else {
        base.to_string()
    }
}

/// Fail unless `path` can be created as a file: its directory must exist
/// and the path itself must not be a directory.
pub fn check_output_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        bail!("Output path '{}' is a directory", path.display());
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        bail!("Output directory '{}' does not exist", parent.display());
    }
    Ok(())
}

pub fn write_eds<P: AsRef<Path>>(path: P, eds: &GeneratedEds) -> io::Result<()> {
    fs::write(path, &eds.text)
}

/// Provenance record of one generated file.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub output: String,
    pub seed: u64,
    pub alphabet: String,
    pub weights: Option<Vec<f64>>,
    pub config: &'a GeneratorConfig,
    pub length: usize,
    pub size: usize,
    pub bytes: usize,
    pub degenerate_segments: usize,
}

impl<'a> RunSummary<'a> {
    pub fn new(
        output: String,
        seed: u64,
        alphabet: &Alphabet,
        config: &'a GeneratorConfig,
        eds: &GeneratedEds,
    ) -> Self {
        RunSummary {
            output,
            seed,
            alphabet: alphabet.to_string(),
            weights: alphabet.weights().map(|w| w.to_vec()),
            config,
            length: eds.length,
            size: eds.size,
            bytes: eds.text.len(),
            degenerate_segments: eds.degenerate_segments,
        }
    }
}

pub fn write_summaries<P: AsRef<Path>>(path: P, summaries: &[RunSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries)?;
    fs::write(path, json)?;
    Ok(())
}
