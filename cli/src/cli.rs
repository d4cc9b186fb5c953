use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxconvert")]
/// OxConvert: converts an RDF file to Turtle, N-Triples, N-Quads, RDF/XML and JSON-LD
///
/// Without subcommand, an interactive menu is shown.
pub struct Args {
    /// Directory in which the source files are looked up
    #[arg(long, global = true, default_value = "res", value_hint = ValueHint::DirPath)]
    pub resources: PathBuf,
    /// Directory in which the converted files are written
    ///
    /// It is created if it does not exist.
    #[arg(long, global = true, default_value = "result", value_hint = ValueHint::DirPath)]
    pub results: PathBuf,
    /// File to which the log lines are appended
    ///
    /// The RUST_LOG environment variable allows to change the logged levels.
    #[arg(long, global = true, default_value = "log/myLog.txt", value_hint = ValueHint::FilePath)]
    pub log_file: PathBuf,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the interactive menu and run the chosen action
    ///
    /// A single character is read from the standard input:
    /// 1 creates the demo graph, 2 converts ISWC2010.rdf and 3 queries the names in ISWC2010.rdf.
    /// Any other character does nothing.
    Menu,
    /// Build a small vCard graph, print it and write it in all formats
    Demo {
        /// Name of the written files, without extension
        #[arg(long, default_value = "basicModel")]
        to: String,
    },
    /// Convert a source file to Turtle, N-Triples, N-Quads, RDF/XML and JSON-LD
    Convert {
        /// Source file, relative to the resources directory
        #[arg(short, long, default_value = "ISWC2010.rdf", value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// The format of the source file
        ///
        /// Can be an extension like "nt" or a MIME type like "application/n-triples".
        ///
        /// By default the format is guessed from the file extension, RDF/XML is assumed if it is not known.
        #[arg(long)]
        format: Option<String>,
        /// Base IRI of the source file
        #[arg(long, value_hint = ValueHint::Url)]
        base: Option<String>,
        /// Name of the written files, without extension
        ///
        /// By default the source file name without its extension.
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Print the literal values of a property in a source file, one per line
    Query {
        /// Source file, relative to the resources directory
        #[arg(short, long, default_value = "ISWC2010.rdf", value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// The format of the source file
        ///
        /// By default the format is guessed from the file extension, RDF/XML is assumed if it is not known.
        #[arg(long)]
        format: Option<String>,
        /// IRI of the property to look up
        #[arg(short, long, default_value = "http://xmlns.com/foaf/0.1/name", value_hint = ValueHint::Url)]
        property: String,
    },
}
