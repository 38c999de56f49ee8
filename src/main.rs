//! quire - render JSON document trees to HTML

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use quire::{Document, HtmlFlags, HtmlRenderer, RenderOptions};

#[derive(Parser)]
#[command(name = "quire")]
#[command(version, about = "Render a JSON document tree to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    quire doc.json                  Render to stdout
    quire doc.json -o doc.html      Render to a file
    quire --hard-wrap --escape      Read stdin, wrap lines, escape raw HTML")]
struct Cli {
    /// Input JSON document (stdin when omitted); nesting deeper than about
    /// 60 nodes is rejected
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output HTML file (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Turn newlines inside paragraphs into line breaks
    #[arg(long)]
    hard_wrap: bool,

    /// Drop raw HTML
    #[arg(long)]
    skip_html: bool,

    /// Escape raw HTML (wins over --skip-html)
    #[arg(long)]
    escape: bool,

    /// Give headers up to this level sequential toc_N ids
    #[arg(long, value_name = "LEVEL")]
    toc_level: Option<u8>,

    /// JSON file with render options; command-line flags are added to it
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> quire::Result<()> {
    let mut renderer = HtmlRenderer::new(load_options(cli)?);
    tracing::info!(options = ?renderer.options(), "render options");

    let doc = match &cli.input {
        Some(path) => Document::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Document::from_json(&json)?
        }
    };

    let html = renderer.render_document(&doc);

    match &cli.output {
        Some(path) => write_output(path, html.as_bytes())?,
        None => io::stdout().lock().write_all(html.as_bytes())?,
    }

    Ok(())
}

fn load_options(cli: &Cli) -> quire::Result<RenderOptions> {
    let mut options = match &cli.options {
        Some(path) => RenderOptions::from_json(&std::fs::read_to_string(path)?)?,
        None => RenderOptions::default(),
    };

    for (set, flag) in [
        (cli.hard_wrap, HtmlFlags::HARD_WRAP),
        (cli.skip_html, HtmlFlags::SKIP_HTML),
        (cli.escape, HtmlFlags::ESCAPE),
    ] {
        if set {
            options = options.with_flag(flag);
        }
    }
    if let Some(level) = cli.toc_level {
        options = options.with_toc_nesting_level(level);
    }

    Ok(options)
}

fn write_output(path: &Path, html: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote HTML");
    Ok(())
}
