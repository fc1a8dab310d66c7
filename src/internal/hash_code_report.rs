#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info};
use plotters::prelude::*;
use rand::Rng;
use wordtable::{
    HashCodeMethod, WordTable, normalize,
    logger::{initialize_logger, verbosity_level},
};

/// Compares collisions of the hash code methods over a range of table sizes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list to load, one word per line. Random words are used when omitted
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Number of random words to generate
    #[arg(short, long, default_value_t = 5_000)]
    count: usize,

    /// Table sizes to test
    #[arg(short, long, value_delimiter = ',', default_values_t = [101, 211, 401, 809, 1601, 3203, 6421])]
    sizes: Vec<usize>,

    /// Where to write the chart
    #[arg(short, long, default_value = "hash_code_collisions.png")]
    output: PathBuf,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Collision counts for one method, one entry per table size
struct MethodRun {
    method: HashCodeMethod,
    collisions: Vec<usize>,
    max_bucket: Vec<usize>,
}

// Lowercase words of 3 to 10 letters
fn random_words(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(3..=10_usize);
            (0..len).map(|_| char::from(b'a' + rng.random_range(0..26_u8))).collect()
        })
        .collect()
}

fn read_words(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(normalize).filter(|word| !word.is_empty()).collect())
}

fn measure(words: &[String], sizes: &[usize]) -> Result<Vec<MethodRun>, wordtable::TableError> {
    let mut runs = Vec::with_capacity(HashCodeMethod::ALL.len());
    for method in HashCodeMethod::ALL {
        let mut run = MethodRun { method, collisions: Vec::new(), max_bucket: Vec::new() };
        for &size in sizes {
            let mut table = WordTable::with_size(size)?;
            table.set_hash_code_method(method);
            for word in words {
                table.put(word)?;
            }
            let stats = table.stats();
            debug!("{method} at size {size}: {stats:?}");
            run.collisions.push(stats.collisions);
            run.max_bucket.push(stats.max_bucket);
        }
        runs.push(run);
    }
    Ok(runs)
}

fn plot(args: &Args, runs: &[MethodRun]) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let last = args.sizes.len().saturating_sub(1).max(1);

    let root = BitMapBackend::new(&args.output, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_collisions = runs
        .iter()
        .flat_map(|run| run.collisions.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1 +
        1.0;

    let mut chart = ChartBuilder::on(&root)
        .caption("Collisions per Hash Code Method", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last, 0.0..max_collisions)?;

    let x_labels: Vec<String> = args.sizes.iter().map(ToString::to_string).collect();
    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Table Size (buckets)")
        .y_desc("Collisions")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, run) in runs.iter().enumerate() {
        let color = &colors[index % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                run.collisions.iter().enumerate().map(|(i, &c)| (i, c as f64)),
                line_style,
            ))?
            .label(run.method.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            run.collisions
                .iter()
                .enumerate()
                .map(|(i, &c)| Circle::new((i, c as f64), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    initialize_logger(verbosity_level(args.verbose));

    let words = match &args.words {
        Some(path) => read_words(path)?,
        None => random_words(args.count),
    };
    info!("measuring {} words over sizes {:?}", words.len(), args.sizes);

    let runs = measure(&words, &args.sizes)?;

    println!("{:<8} {:>8} {:>12} {:>12}", "method", "size", "collisions", "max. bucket");
    for run in &runs {
        for (i, size) in args.sizes.iter().enumerate() {
            println!(
                "{:<8} {:>8} {:>12} {:>12}",
                run.method.name(),
                size,
                run.collisions[i],
                run.max_bucket[i]
            );
        }
    }

    plot(&args, &runs)?;
    println!("Generated chart: {}", args.output.display());

    Ok(())
}
