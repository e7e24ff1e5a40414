use appshots::{config, icons, organize, output, process, scan, verify};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("APPSHOTS_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("APPSHOTS_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "appshots")]
#[command(about = "Prepare App Store screenshots and iOS app icons")]
#[command(long_about = "\
Prepare App Store screenshots and iOS app icons

Every source screenshot is rendered once per device target in the catalog.
Each output is center-cropped to the target's aspect ratio and scaled to its
exact pixel size, then named with that size so it can be verified later:

  screenshots/home.png  →  App_Store_Screenshots/home_iPhone_12_1170x2532.png

Pipeline:

  screenshots   input folder  →  one PNG per (image, target)
  verify        re-decode outputs, compare with the size in the name
  organize      copy outputs into display-class folders + README.md
  build         all three in order

The device catalog, display classes and icon slots come from appshots.toml.
Run 'appshots gen-config' to print a documented copy of the defaults.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Folder of source screenshots
    #[arg(long, default_value = "screenshots", global = true)]
    input: PathBuf,

    /// Folder receiving the rendered screenshots
    #[arg(long, default_value = "App_Store_Screenshots", global = true)]
    output: PathBuf,

    /// Folder receiving the display-class layout (recreated on every run)
    #[arg(long, default_value = "App_Store_Screenshots_Organized", global = true)]
    organized: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every source image at every catalog target
    Screenshots,
    /// Check rendered files against the size in their names
    Verify,
    /// Copy rendered files into display-class folders
    Organize,
    /// Generate the iOS AppIcon set from one image
    Icons {
        /// Source image, ideally 1024x1024
        source: PathBuf,
        /// Output folder for the icons and Contents.json
        #[arg(long, default_value = "Assets.xcassets/AppIcon.appiconset")]
        out: PathBuf,
    },
    /// Run the full pipeline: screenshots → verify → organize
    Build,
    /// Validate config and list inputs without writing anything
    Check,
    /// Print a stock appshots.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run one command. `Ok(false)` means it completed but found failures.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Screenshots => {
            let config = config::load_config(&cli.config)?;
            let summary = run_screenshots(&config, &cli.input, &cli.output)?;
            Ok(!summary.has_failures())
        }
        Command::Verify => {
            let report = verify::verify(&cli.output)?;
            output::print_verify_report(&report);
            Ok(!report.has_problems())
        }
        Command::Organize => {
            let config = config::load_config(&cli.config)?;
            let report = organize::organize(&cli.output, &cli.organized, &config)?;
            output::print_organize_report(&report);
            Ok(true)
        }
        Command::Icons { source, out } => {
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let summary = icons::generate_icons(source, out, &config.icons)?;
            output::print_icon_summary(&summary);
            Ok(!summary.has_failures())
        }
        Command::Build => {
            let config = config::load_config(&cli.config)?;

            println!("==> Stage 1: Screenshots {} → {}", cli.input.display(), cli.output.display());
            let summary = run_screenshots(&config, &cli.input, &cli.output)?;

            println!("==> Stage 2: Verifying {}", cli.output.display());
            let report = verify::verify(&cli.output)?;
            output::print_verify_report(&report);

            println!("==> Stage 3: Organizing → {}", cli.organized.display());
            let organized = organize::organize(&cli.output, &cli.organized, &config)?;
            output::print_organize_report(&organized);

            let ok = !summary.has_failures() && !report.has_problems();
            if ok {
                println!("==> Build complete: {}", cli.organized.display());
            } else {
                println!("==> Build finished with failures");
            }
            Ok(ok)
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let scanned = scan::scan(&cli.input)?;
            output::print_check_output(&config, &scanned, &cli.input);
            println!("==> Config is valid");
            Ok(true)
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(true)
        }
    }
}

/// Stage 1 with live progress lines.
fn run_screenshots(
    config: &config::AppConfig,
    input: &Path,
    out: &Path,
) -> Result<process::ProcessSummary, process::ProcessError> {
    init_thread_pool(&config.processing);
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::process(
        input,
        out,
        &config.screenshots.targets,
        config.screenshots.compression,
        Some(tx),
    );
    // The sender was moved into `process` and dropped on return
    printer.join().ok();
    let summary = result?;
    output::print_process_summary(&summary, config.screenshots.targets.len());
    Ok(summary)
}

/// Diagnostics go to stderr so stdout stays the stage report.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: the config can lower it, not raise it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
