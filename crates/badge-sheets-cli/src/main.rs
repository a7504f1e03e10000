use anyhow::{Context, Result, bail};
use badge_sheets::{BadgeOptions, LabelFont, PaperSize};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "badges",
    about = "Lay out QR-code name badges on printable pages from a CSV file or workbook",
    version
)]
struct Cli {
    /// Input CSV file or workbook (.xlsx, .xlsm, .xlsb, .xls, .ods) with a name
    /// column and a code column
    #[arg(short, long)]
    file: PathBuf,

    /// Base output directory; each run writes to a timestamped folder inside it
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Open the output folder when done
    #[arg(long)]
    open: bool,

    /// JSON options file (flags below override its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// TrueType font for the labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output resolution
    #[arg(long)]
    dpi: Option<u32>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Header of the name column
    #[arg(long)]
    name_column: Option<String>,

    /// Header of the code column
    #[arg(long)]
    code_column: Option<String>,

    /// Show statistics only, don't render anything
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl Cli {
    async fn options(&self) -> Result<BadgeOptions> {
        let mut options = match &self.config {
            Some(path) => BadgeOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => BadgeOptions::default(),
        };

        if let Some(font) = &self.font {
            options.font_path = Some(font.clone());
        }
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(column) = &self.name_column {
            options.name_column = column.clone();
        }
        if let Some(column) = &self.code_column {
            options.code_column = column.clone();
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        bail!("Input file not found: {}", cli.file.display());
    }

    let options = cli.options().await?;

    log::info!("Reading records: {}", cli.file.display());
    let loaded =
        badge_sheets::load_records(&cli.file, &options.name_column, &options.code_column).await?;
    if !loaded.skipped.is_empty() {
        log::warn!("{} row(s) skipped for missing name or code", loaded.skipped.len());
    }

    if cli.stats_only {
        let stats =
            badge_sheets::calculate_statistics(loaded.records.len(), &options.page_geometry());
        println!("Badge Statistics:");
        println!("  Records: {}", stats.badges);
        println!("  Skipped rows: {}", loaded.skipped.len());
        println!("  Grid: {} cols x {} rows", stats.cols, stats.rows);
        println!("  Badges per page: {}", stats.per_page);
        println!("  Pages: {}", stats.pages);
        println!("  Badges on last page: {}", stats.last_page_badges);
        return Ok(());
    }

    let font = LabelFont::load(options.font_path.as_deref(), options.badge.font_size_px)?;
    if let Some(source) = font.source() {
        log::info!("Font: {}", source.display());
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let output_dir = cli.output.join(timestamp);
    log::info!("Output directory: {}", output_dir.display());

    let rendered = badge_sheets::render_pages(loaded.records, &options, font).await?;
    println!(
        "Badges generated: {}  |  Errors: {}",
        rendered.badges_rendered,
        loaded.skipped.len() + rendered.failures.len()
    );

    if rendered.pages.is_empty() {
        log::warn!("Nothing to lay out");
        return Ok(());
    }

    let saved = badge_sheets::save_pages(&rendered.pages, &output_dir).await?;
    let stats =
        badge_sheets::calculate_statistics(rendered.badges_rendered, &options.page_geometry());
    println!(
        "Pages: {} (badges per page: {}, cols={}, rows={})",
        saved.len(),
        stats.per_page,
        stats.cols,
        stats.rows
    );

    let pdf_path = output_dir.join(&options.pdf_name);
    badge_sheets::save_pdf(&rendered.pages, &pdf_path).await?;
    println!(
        "Generated {} pages → {}",
        rendered.pages.len(),
        pdf_path.display()
    );

    if cli.open {
        if let Err(e) = open_folder(&output_dir) {
            log::warn!("Could not open {}: {}", output_dir.display(), e);
        }
    }

    Ok(())
}

/// Open `dir` in the platform's file browser
fn open_folder(dir: &Path) -> Result<()> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("resolving {}", dir.display()))?;

    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    std::process::Command::new(program)
        .arg(&dir)
        .spawn()
        .with_context(|| format!("running {}", program))?;
    Ok(())
}
