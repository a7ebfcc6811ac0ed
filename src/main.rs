use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::time::Instant;

use grapheme_rs::{validate_str, GraphemeNormMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file, one line per sample
    #[arg(short, long)]
    input: String,

    /// Output file (JSONL) - optional, skip to benchmark only
    #[arg(short, long)]
    output: Option<String>,

    /// Segmentation granularity
    #[arg(short, long, value_enum, default_value_t = Mode::Combined)]
    mode: Mode,

    /// Log a note for every rejected code point
    #[arg(short, long)]
    report_errors: bool,

    /// Limit number of lines to process
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Single,
    Combined,
    Glyphs,
    Unicodes,
}

impl From<Mode> for GraphemeNormMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => GraphemeNormMode::SingleString,
            Mode::Combined => GraphemeNormMode::Combined,
            Mode::Glyphs => GraphemeNormMode::GlyphSplit,
            Mode::Unicodes => GraphemeNormMode::IndividualUnicodes,
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    ok: bool,
    segments: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mode = GraphemeNormMode::from(args.mode);

    println!("Reading source: {}", args.input);
    let file = File::open(&args.input)?;
    let reader = BufReader::new(file);
    let mut lines: Vec<String> = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(limit) = args.limit {
        if limit < lines.len() {
            lines.truncate(limit);
        }
    }

    println!("Validating {} lines...", lines.len());
    let start_process = Instant::now();

    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| {
            let validation = validate_str(mode, args.report_errors, line)
                .map_err(|e| anyhow::anyhow!("line {}: {}", i, e))?;
            let record = Record {
                id: i,
                input: line,
                ok: validation.ok,
                segments: validation.strings(),
            };
            Ok(serde_json::to_string(&record)?)
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    if let Some(ref output_path) = args.output {
        let output_file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(262144, output_file);
        for result in &results {
            writeln!(writer, "{}", result)?;
        }
        writer.flush()?;
    }

    let duration = start_process.elapsed();
    if let Some(ref output_path) = args.output {
        println!("Done. Saved to {}", output_path);
    }
    println!("Time taken: {:.2}s", duration.as_secs_f32());
    println!(
        "Speed: {:.2} lines/sec",
        lines.len() as f32 / duration.as_secs_f32()
    );

    Ok(())
}
