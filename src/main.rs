// Dristicon: animated data structure workbench in the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use dristicon::engine::settings::{OverlapPolicy, Settings, Speed};
use dristicon::engine::StructureKind;
use dristicon::ui::App;

/// Command-line options
struct Options {
    settings: Settings,
    tab: StructureKind,
    log: Option<PathBuf>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --speed <factor>          Initial animation speed, 0.2 to 2.0 (default 1.0)");
    eprintln!("  --policy <cancel|settle>  What a new request does to a pending removal");
    eprintln!("  --tab <structure>         array, stack, queue, list or bst");
    eprintln!("  --log <file>              Write debug logs to <file> (filter with RUST_LOG)");
    eprintln!("  --help                    Show this message");
}

fn fail(program_name: &str, message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!();
    print_usage(program_name);
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> Options {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("dristicon");
    let mut options = Options {
        settings: Settings::default(),
        tab: StructureKind::Array,
        log: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        if flag == "--help" || flag == "-h" {
            print_usage(program_name);
            std::process::exit(0);
        }

        let Some(value) = iter.next() else {
            fail(program_name, &format!("Missing value for '{}'", flag));
        };

        match flag.as_str() {
            "--speed" => match value.parse::<f64>() {
                Ok(factor) if factor.is_finite() => options.settings.speed = Speed::new(factor),
                _ => fail(program_name, &format!("Invalid speed '{}'", value)),
            },
            "--policy" => match value.parse::<OverlapPolicy>() {
                Ok(policy) => options.settings.overlap = policy,
                Err(e) => fail(program_name, &e),
            },
            "--tab" => match value.parse::<StructureKind>() {
                Ok(kind) => options.tab = kind,
                Err(e) => fail(program_name, &e),
            },
            "--log" => options.log = Some(PathBuf::from(value)),
            other => fail(program_name, &format!("Unknown option '{}'", other)),
        }
    }

    options
}

/// Send tracing output to `path`; without `--log` nothing is installed
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dristicon=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Some(path) = &options.log {
        init_logging(path)?;
        tracing::info!(
            speed = %options.settings.speed,
            policy = %options.settings.overlap,
            tab = %options.tab,
            "starting"
        );
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&options.settings, options.tab);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
