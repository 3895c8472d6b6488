use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use zipf_counts::utils::logger;
use zipf_counts::{count_words, CountTable};

/// Count the occurrence of all words in a text and output them in CSV
/// format, most frequent first.
#[derive(Parser)]
#[command(name = "countwords")]
#[command(about = "Count word occurrences in a text and emit word,count CSV")]
struct Args {
    /// Input file name; stdin when omitted
    infile: Option<String>,

    #[arg(short, long, help = "Output only the n most frequent words")]
    num: Option<usize>,

    #[arg(short, long, help = "Output file name; stdout when omitted")]
    outfile: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn render_csv(counts: &CountTable, num: Option<usize>) -> anyhow::Result<String> {
    let rows = counts.most_common();
    let limit = num.unwrap_or(rows.len());
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (word, count) in rows.into_iter().take(limit) {
        writer.write_record([word.as_str(), &count.to_string()])?;
    }
    let bytes = writer.into_inner().context("flushing CSV output")?;
    Ok(String::from_utf8(bytes)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let counts = match &args.infile {
        Some(path) => {
            tracing::debug!("Reading text from {}", path);
            let file = File::open(path).with_context(|| format!("opening {}", path))?;
            count_words(file).with_context(|| format!("counting words in {}", path))?
        }
        None => {
            tracing::debug!("Reading text from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            count_words(text.as_bytes())?
        }
    };
    tracing::info!("Counted {} distinct words", counts.len());

    let output = render_csv(&counts, args.num)?;
    match &args.outfile {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path))?;
            file.write_all(output.as_bytes())?;
            tracing::info!("Counts written to {}", path);
        }
        None => {
            io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}
