use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use winecloud::{
    BarChart, MaskBuffer, ReviewSet, SortBy, StopwordSet, WineReview, WordCloudBuilder,
    parse_color, sort_summaries, summarize_by_country,
};

#[derive(Parser, Debug)]
#[command(name = "winecloud", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print descriptive statistics for the review dataset.
    Stats(StatsArgs),
    /// Render a per-country bar chart as a PNG.
    Chart(ChartArgs),
    /// Render a word cloud from review text as a PNG.
    Cloud(CloudArgs),
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Input review CSV.
    #[arg(long)]
    data: PathBuf,

    /// Number of top countries (by mean points) to list.
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Emit the top countries as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Metric {
    /// Number of wines per country.
    Wines,
    /// Highest points per country.
    MaxPoints,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Input review CSV.
    #[arg(long)]
    data: PathBuf,

    /// Aggregate plotted per country, sorted descending.
    #[arg(long, value_enum, default_value_t = Metric::Wines)]
    metric: Metric,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Figure width in pixels.
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Figure height in pixels.
    #[arg(long, default_value_t = 1000)]
    height: u32,
}

#[derive(Parser, Debug)]
struct CloudArgs {
    /// Input review CSV.
    #[arg(long)]
    data: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Use only the description of the review at this index; all reviews when
    /// unset.
    #[arg(long)]
    review: Option<usize>,

    /// Mask image confining word placement; normalized on load.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Maximum number of words rendered.
    #[arg(long, default_value_t = 200)]
    max_words: usize,

    /// Largest font size in pixels; derived from canvas height when unset.
    #[arg(long)]
    max_font_size: Option<f32>,

    /// Background color (name or #rrggbb).
    #[arg(long, default_value = "white")]
    background: String,

    /// Mask outline thickness in pixels; 0 disables the outline.
    #[arg(long, default_value_t = 0)]
    contour_width: u8,

    /// Mask outline color (name or #rrggbb).
    #[arg(long, default_value = "firebrick")]
    contour_color: String,

    /// Extra stopwords on top of the stock list; repeatable.
    #[arg(long = "stopword")]
    stopwords: Vec<String>,

    /// Font file to render with; system font directories are probed when
    /// unset.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Stats(args) => cmd_stats(args),
        Command::Chart(args) => cmd_chart(args),
        Command::Cloud(args) => cmd_cloud(args),
    }
}

fn sample(values: &[&str], n: usize) -> String {
    values
        .iter()
        .take(n)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let set = ReviewSet::from_path(&args.data)?;
    let mut summaries = summarize_by_country(&set);
    sort_summaries(&mut summaries, SortBy::MeanPoints, true);
    summaries.truncate(args.top);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let varieties = set.unique_varieties();
    let countries = set.unique_countries();
    println!(
        "There are {} observations and {} features in this dataset.\n",
        set.len(),
        WineReview::FIELD_COUNT
    );
    println!(
        "There are {} types of wine in this dataset such as {}...\n",
        varieties.len(),
        sample(&varieties, 5)
    );
    println!(
        "There are {} countries producing wine in this dataset such as {}...\n",
        countries.len(),
        sample(&countries, 5)
    );
    println!("Top {} countries by mean points:", summaries.len());
    for s in &summaries {
        println!(
            "  {}: {:.2} mean points over {} wines (max {})",
            s.country, s.mean_points, s.wines, s.max_points
        );
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let set = ReviewSet::from_path(&args.data)?;
    let mut summaries = summarize_by_country(&set);

    let (sort_by, y_label, value): (_, _, fn(&winecloud::CountrySummary) -> f64) = match args.metric
    {
        Metric::Wines => (SortBy::Wines, "Number of Wines", |s| s.wines as f64),
        Metric::MaxPoints => (SortBy::MaxPoints, "Highest point of Wines", |s| {
            f64::from(s.max_points)
        }),
    };
    sort_summaries(&mut summaries, sort_by, true);
    let bars: Vec<(String, f64)> = summaries
        .iter()
        .map(|s| (s.country.clone(), value(s)))
        .collect();

    BarChart::new()
        .x_label("Country of Origin")
        .y_label(y_label)
        .size(args.width, args.height)
        .render(&bars, &args.out)?;
    println!("wrote chart to '{}'", args.out.display());
    Ok(())
}

fn cmd_cloud(args: CloudArgs) -> anyhow::Result<()> {
    let set = ReviewSet::from_path(&args.data)?;
    let text = match args.review {
        Some(idx) => set
            .get(idx)
            .with_context(|| format!("review index {idx} out of range (0..{})", set.len()))?
            .description
            .clone(),
        None => set.joined_descriptions(),
    };

    let mut stopwords = StopwordSet::standard();
    stopwords.extend(args.stopwords.iter());

    let mut builder = WordCloudBuilder::new()
        .max_words(args.max_words)
        .background(parse_color(&args.background)?)
        .stopwords(stopwords)
        .contour_width(args.contour_width)
        .contour_color(parse_color(&args.contour_color)?);
    if let Some(path) = &args.mask {
        builder = builder.mask(MaskBuffer::open(path)?.normalize());
    }
    if let Some(px) = args.max_font_size {
        builder = builder.max_font_size(px);
    }
    if let Some(font) = &args.font {
        builder = builder.font_path(font);
    }

    let cloud = builder.generate(&text)?;
    cloud.to_file(&args.out)?;
    println!(
        "placed {} words; wrote '{}'",
        cloud.placements().len(),
        args.out.display()
    );
    Ok(())
}
