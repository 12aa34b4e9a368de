use clap::{Parser, Subcommand};
use showcase::{assets, config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version)]
#[command(about = "Static portfolio pipeline: project folders become cards and modals")]
#[command(long_about = "\
Static portfolio pipeline: project folders become cards and modals

Your filesystem is the data source. Each subdirectory of the projects root
is one project, described by a project.md and its neighboring media files.
The build patches the generated fragments into the host page between
marker comments, leaving the rest of the page untouched.

Content structure:

  projects/
  ├── alpha/
  │   ├── project.md               # Front matter + markdown body (required)
  │   ├── cover.png                # Designated cover (optional)
  │   ├── dashboard.png            # Gallery image
  │   └── demo_loop.mp4            # _loop suffix = muted autoplaying loop
  └── beta/
      ├── project.md
      └── screenshot.jpg           # First image becomes the cover

project.md front matter keys (all optional):
  title, category, description, tech (comma-separated),
  github, live, order (numeric; lower sorts first)

Host page markers (defaults; see 'showcase gen-config'):
  <!-- PROJECT_CARDS_START -->  ...  <!-- PROJECT_CARDS_END -->
  <!-- PROJECT_MODALS_START --> ...  <!-- PROJECT_MODALS_END -->   (optional)

Run 'showcase assets' to print the CSS/JS blocks for the host page.")]
struct Cli {
    /// Projects root directory (overrides showcase.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Host HTML page to patch (overrides showcase.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Directory containing showcase.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan projects and patch the host page (default)
    Build,
    /// Validate the projects directory without writing anything
    Check,
    /// Print the scan manifest as JSON
    Scan,
    /// Print the gallery CSS and lightbox JS blocks
    Assets,
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut site_config = config::load_config(&cli.config_dir)?;
    if let Some(source) = &cli.source {
        site_config.projects_dir = source.clone();
    }
    if let Some(output_file) = &cli.output {
        site_config.output_file = output_file.clone();
    }

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let manifest = scan::scan(&site_config.projects_dir, &site_config)?;
            if manifest.projects.is_empty() {
                output::print_empty_guidance(&manifest);
                return Ok(());
            }
            let report = generate::generate(&manifest, &site_config.output_file)?;
            output::print_build_output(&manifest, &report);
        }
        Command::Check => {
            let manifest = scan::scan(&site_config.projects_dir, &site_config)?;
            output::print_scan_output(&manifest);
            println!("Content is valid");
        }
        Command::Scan => {
            let manifest = scan::scan(&site_config.projects_dir, &site_config)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Assets => {
            println!("/* gallery.css */");
            println!("{}", assets::gallery_css());
            println!("/* lightbox.js */");
            println!("{}", assets::lightbox_js());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
