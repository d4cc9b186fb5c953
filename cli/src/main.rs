#![allow(clippy::print_stderr, clippy::print_stdout)]
use crate::cli::{Args, Command};
use anyhow::{Context, bail};
use clap::Parser;
use oxconvert::demo::{demo_graph, describe};
use oxconvert::io::RdfFormat;
use oxconvert::model::NamedNode;
use oxconvert::{Converter, EmitReport, input_format_from_name, property_values};
use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write, stdin, stdout};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

const MENU: &str = "1-> Create a new model\n2-> Convert existing file\n3-> Query the database\n";
const DEMO_FILE: &str = "ISWC2010.rdf";
const DEMO_BASE_NAME: &str = "basicModel";
const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

pub fn main() -> anyhow::Result<()> {
    let Args {
        resources,
        results,
        log_file,
        command,
    } = Args::parse();
    let subscriber = log_subscriber(&log_file)?;
    tracing::subscriber::with_default(subscriber, || {
        let converter = Converter::new(results);
        match command.unwrap_or(Command::Menu) {
            Command::Menu => menu(&converter, &resources),
            Command::Demo { to } => create_demo(&converter, &to),
            Command::Convert {
                file,
                format,
                base,
                to,
            } => {
                let mut converter = with_input_format(converter, format.as_deref())?;
                if let Some(base) = base {
                    converter = converter.with_base_iri(base);
                }
                let to = match to {
                    Some(to) => to,
                    None => base_name(&file)?,
                };
                convert(&converter, &resources.join(file), &to)
            }
            Command::Query {
                file,
                format,
                property,
            } => query(
                &with_input_format(converter, format.as_deref())?,
                &resources.join(file),
                &property,
            ),
        }
    })
}

/// Builds the logger writing to `log_file`.
///
/// Each line holds the timestamp, the level, the logger name and the message.
fn log_subscriber(
    log_file: &Path,
) -> anyhow::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Unable to create the log directory {}", parent.display())
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Unable to open the log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .finish())
}

fn menu(converter: &Converter, resources: &Path) -> anyhow::Result<()> {
    let mut stdout = stdout().lock();
    stdout.write_all(MENU.as_bytes())?;
    stdout.flush()?;
    drop(stdout);

    match stdin().lock().bytes().next().transpose()? {
        Some(b'1') => create_demo(converter, DEMO_BASE_NAME)?,
        Some(b'2') => convert(
            converter,
            &resources.join(DEMO_FILE),
            &base_name(Path::new(DEMO_FILE))?,
        )?,
        Some(b'3') => query(converter, &resources.join(DEMO_FILE), FOAF_NAME)?,
        _ => {
            info!("No action chosen");
            return Ok(());
        }
    }
    println!("Complete!");
    Ok(())
}

fn create_demo(converter: &Converter, base_name: &str) -> anyhow::Result<()> {
    debug!("Creating the demo graph");
    let graph = demo_graph();
    describe(graph.graph(), stdout().lock())?.flush()?;
    check_report(converter.emit(&graph, base_name))
}

fn convert(converter: &Converter, file: &Path, base_name: &str) -> anyhow::Result<()> {
    let report = converter.convert(file, base_name)?;
    check_report(report)
}

fn query(converter: &Converter, file: &Path, property: &str) -> anyhow::Result<()> {
    let property = NamedNode::new(property)
        .with_context(|| format!("The property IRI {property} is invalid"))?;
    let graph = converter.load(file)?;
    let mut stdout = stdout().lock();
    for value in property_values(graph.graph(), property.as_ref()) {
        writeln!(stdout, "{}", value?)?;
    }
    stdout.flush()?;
    debug!("Query of {property} done");
    Ok(())
}

fn check_report(report: EmitReport) -> anyhow::Result<()> {
    for outcome in report.outcomes() {
        if let Err(error) = outcome.result() {
            eprintln!("{error}");
        }
    }
    if let Err(error) = report.into_result() {
        bail!("Not all the formats have been written, first failure: {error}")
    }
    Ok(())
}

fn with_input_format(converter: Converter, format: Option<&str>) -> anyhow::Result<Converter> {
    Ok(if let Some(format) = format {
        converter.with_input_format(rdf_format_from_name(format)?)
    } else {
        converter
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    input_format_from_name(name).with_context(|| format!("The file format '{name}' is unknown"))
}

fn base_name(file: &Path) -> anyhow::Result<String> {
    Ok(file
        .file_stem()
        .and_then(OsStr::to_str)
        .with_context(|| format!("Unable to get an output name from {}", file.display()))?
        .to_owned())
}
