//! mdtoc: linked tables of contents for markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use log::LevelFilter;
use mdtoc::config::Config;
use mdtoc::document::Document;
use mdtoc::{parser, toc, writer};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Generate a linked table of contents for a markdown document", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Markdown file to generate the table of contents from
    #[arg(long)]
    file: Option<PathBuf>,

    /// Generate the table of contents from an inline string
    #[arg(long)]
    text: Option<String>,

    /// Print the table of contents to stdout (the default)
    #[arg(long)]
    print: bool,

    /// Write the table of contents into the file, after its top-level heading
    #[arg(long)]
    write: bool,

    /// Dump the parsed outline as JSON instead of a rendered list
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.print && self.write {
            return Err("cannot set --print and --write at the same time".into());
        }
        if self.file.is_some() && self.text.is_some() {
            return Err("cannot set --file and --text at the same time".into());
        }
        if self.json && self.write {
            return Err("cannot set --json and --write at the same time".into());
        }
        Ok(())
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::new().with_level(level).init();

    if let Err(e) = run(&args) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    args.validate()?;

    let cfg = Config::load();
    let document = select_document(args, &cfg)?;
    if args.write && document.path().is_none() {
        return Err("the --write flag needs a file to write into".into());
    }

    let source = document.load()?;
    let Some(outline) = parser::parse(&source)? else {
        log::warn!("no headings found, nothing to generate");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    let toc = toc::render(&outline);
    if args.write {
        if let Some(path) = document.path() {
            if writer::splice(path, &toc)? {
                log::debug!("wrote table of contents into {}", path.display());
            } else {
                log::warn!(
                    "no top-level heading in {}, file left unchanged",
                    path.display()
                );
            }
        }
        return Ok(());
    }

    println!("{toc}");
    Ok(())
}

/// Pick the document source: explicit flags first, then the config default.
fn select_document(args: &Args, cfg: &Config) -> Result<Document, Box<dyn Error>> {
    if let Some(text) = &args.text {
        return Ok(Document::Text(text.clone()));
    }
    if let Some(file) = &args.file {
        return Ok(Document::File(file.clone()));
    }
    if !cfg.file.is_empty() {
        return Ok(Document::File(PathBuf::from(&cfg.file)));
    }
    Err("must set one of --file or --text (or a file entry in mdtoc.toml)".into())
}
