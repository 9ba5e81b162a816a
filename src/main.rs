use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xmlb::{
    document::{DEFAULT_ENCODING, DEFAULT_VERSION},
    end_xml, new, new_advanced_document, Builder, Opt, Outcome,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render a single XML element", long_about = None)]
struct Args {
    /// Element name
    #[arg(short, long)]
    label: String,

    /// Element text; without it a self-closing tag is rendered
    #[arg(short, long)]
    contents: Option<String>,

    /// Attribute as key=value, may be repeated
    #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    attrs: Vec<Opt>,

    /// Wrap the contents in a CDATA section
    #[arg(long)]
    cdata: bool,

    /// Comment to place above the element, may be repeated
    #[arg(long = "comment", value_name = "TEXT")]
    comments: Vec<String>,

    /// Declaration version
    #[arg(long, default_value = DEFAULT_VERSION)]
    xml_version: String,

    /// Declaration encoding
    #[arg(long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Omit the XML declaration
    #[arg(long)]
    fragment: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn parse_attr(raw: &str) -> std::result::Result<Opt, String> {
    match raw.split_once('=') {
        Some((key, value)) => Ok(Opt::new(key, value)),
        None => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

fn main() {
    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let element = build_element(&args)?;
    let body = args
        .comments
        .iter()
        .fold(element, |document, text| document.comment(text));
    let body = end_xml(body)?;

    let output = if args.fragment {
        body
    } else {
        let declaration = end_xml(new_advanced_document(&args.xml_version, &args.encoding))?;
        format!("{declaration}{body}")
    };

    info!(label = %args.label, bytes = output.len(), "element rendered");
    write_output(&args.output, output.as_bytes())
}

fn build_element(args: &Args) -> Result<Outcome> {
    let element = match (&args.contents, args.cdata) {
        (Some(contents), true) => {
            if !args.attrs.is_empty() {
                bail!("--attr cannot be combined with --cdata");
            }
            new().cdata_tag(&args.label, contents)
        }
        (Some(contents), false) if args.attrs.is_empty() => new().tag(&args.label, contents),
        (Some(contents), false) => new().option_content_tag(&args.label, contents, &args.attrs),
        (None, true) => bail!("--cdata requires --contents"),
        (None, false) => new().option_tag(&args.label, &args.attrs),
    };
    Ok(element)
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
