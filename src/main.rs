//! ascii-graphs CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascii_graphs::{LayoutPrefs, render_edge_list};

/// Draw a directed graph, given as an edge list, as ASCII/Unicode text.
#[derive(Parser, Debug)]
#[command(name = "ascii-graphs", version, about)]
struct Cli {
    /// Input file with one `A -> B` edge or bare vertex per line (stdin if omitted)
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Preferences as JSON, e.g. '{"vertical": false}'; flags below override it
    #[arg(long = "prefs")]
    prefs: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    ascii: bool,

    /// Lay layers out left to right
    #[arg(long = "horizontal")]
    horizontal: bool,

    /// Double borders around vertices
    #[arg(long = "double-vertices")]
    double_vertices: bool,

    /// Rounded corners (Unicode only)
    #[arg(long = "rounded")]
    rounded: bool,

    /// Mark every bend with '+' in ASCII mode
    #[arg(long = "explicit-ascii-bends")]
    explicit_ascii_bends: bool,

    /// Lift horizontal edge runs toward their source
    #[arg(long = "elevate-edges")]
    elevate_edges: bool,

    /// Keep Z-shaped jogs in edges
    #[arg(long = "keep-kinks")]
    keep_kinks: bool,

    /// Keep unused rows and columns
    #[arg(long = "no-compact")]
    no_compact: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layout_prefs(&self) -> Result<LayoutPrefs, String> {
        let mut prefs = match &self.prefs {
            Some(json) => LayoutPrefs::from_json(json).map_err(|e| e.to_string())?,
            None => LayoutPrefs::default(),
        };
        if self.ascii {
            prefs.unicode = false;
        }
        if self.horizontal {
            prefs.vertical = false;
        }
        if self.double_vertices {
            prefs.double_vertices = true;
        }
        if self.rounded {
            prefs.rounded = true;
        }
        if self.explicit_ascii_bends {
            prefs.explicit_ascii_bends = true;
        }
        if self.elevate_edges {
            prefs.elevate_edges = true;
        }
        if self.keep_kinks {
            prefs.remove_kinks = false;
        }
        if self.no_compact {
            prefs.compactify = false;
        }
        Ok(prefs)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prefs = match cli.layout_prefs() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let rendered = match render_edge_list(&text, &prefs) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, format!("{rendered}\n")) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
