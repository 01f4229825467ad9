use anyhow::Result;
use clap::{Parser, ValueEnum};
use covid19_plotter::api::DEFAULT_BASE_URL;
use covid19_plotter::drilldown::Lookups;
use covid19_plotter::viz::{ImageFormat, RenderOptions};
use covid19_plotter::{Client, Console, Datasets, Output, SaveFormat, Session};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covid19-plotter",
    version,
    about = "Interactively plot JHU CSSE COVID-19 time series"
)]
struct Cli {
    /// Base URL of the time series CSV directory.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Read the five time series CSVs from this directory instead of downloading.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Directory charts (and saved series) are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Chart file format.
    #[arg(long, value_enum, default_value_t = ChartFormat::Svg)]
    format: ChartFormat,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Locale for thousands separators on the y axis (e.g. en, de, fr).
    #[arg(long, default_value = "en")]
    locale: String,
    /// TrueType font used for chart text (default: first system font found).
    #[arg(long)]
    font: Option<PathBuf>,
    /// Open each chart with the system viewer after writing it.
    #[arg(long, default_value_t = false)]
    open: bool,
    /// Print summary statistics of each plotted series.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Also save each plotted series next to the chart.
    #[arg(long, value_enum)]
    save: Option<SaveArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartFormat {
    Svg,
    Png,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SaveArg {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = Output {
        render: RenderOptions {
            out_dir: cli.out_dir,
            format: match cli.format {
                ChartFormat::Svg => ImageFormat::Svg,
                ChartFormat::Png => ImageFormat::Png,
            },
            width: cli.width,
            height: cli.height,
            locale: cli.locale,
            font: cli.font,
        },
        stats: cli.stats,
        save: cli.save.map(|s| match s {
            SaveArg::Csv => SaveFormat::Csv,
            SaveArg::Json => SaveFormat::Json,
        }),
        open: cli.open,
    };
    std::fs::create_dir_all(&output.render.out_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Loading...")?;
    out.flush()?;
    let datasets = match &cli.data_dir {
        Some(dir) => Datasets::from_dir(dir)?,
        None => Datasets::fetch(&Client::with_base_url(cli.base_url))?,
    };
    writeln!(
        out,
        "Last Updated: {}\n",
        datasets.last_updated().date.format("%m/%d/%y")
    )?;

    let lookups = Lookups::default();
    let console = Console::new(io::stdin().lock(), out);
    let mut session = Session::new(console, &datasets, &lookups, output);
    let written = session.run()?;
    log::debug!("{written} charts written");
    Ok(())
}
