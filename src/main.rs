use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weekly_grid::logger::StderrLogger;
use weekly_grid::{config, layout, output, render, scan};

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "weekly-grid")]
#[command(about = "Tile folders of photos into a weekly .docx report")]
#[command(long_about = "\
Tile folders of photos into a weekly .docx report

Every subfolder of image_base_folder becomes a section of the document.
Its .jpg, .png and .jpeg files are laid out on a fixed grid, as many pages
as needed, each page headed by the folder name and the current week.

  photos/
  ├── Kitchen/          # Section titled \"Kitchen\"
  │   ├── 01.jpg
  │   └── 02.png
  └── Roof/
      └── overview.jpeg

Images missing or unreadable at render time are replaced by a line of text
naming the file. The output file is overwritten on every run.

Run 'weekly-grid gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (.toml, or .json)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Date whose week goes in the page headers (YYYY-MM-DD, default today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the image folders and write the report (default)
    Build,
    /// Show the page plan without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    StderrLogger::new(cli.verbose).init()?;

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
            println!(
                "==> Building {} from {}",
                config.output_file.display(),
                config.image_base_folder.display()
            );
            let summary = render::generate(&config, today)?;
            output::print_render_output(&summary);
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking {}", config.image_base_folder.display());
            let groups = scan::scan(&config.image_base_folder)?;
            output::print_scan_output(&groups, &layout::Grid::from_config(&config));
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
