//! Reads a graph once and writes it in all the [`OutputFormat`]s.

use crate::error::{LoadError, WriteError};
use crate::format::{OutputFormat, input_format_from_path};
use crate::loaded::LoadedGraph;
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Loads RDF graphs and writes them in the five [`OutputFormat`]s.
///
/// ```
/// use oxconvert::{Converter, OutputFormat};
///
/// let output = tempfile::tempdir()?;
/// let converter = Converter::new(output.path());
/// let report = converter.emit(&oxconvert::demo::demo_graph(), "basicModel");
/// assert!(report.is_success());
/// for format in OutputFormat::ALL {
///     assert!(output.path().join(format!("basicModel.{}", format.file_extension())).exists());
/// }
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    output_dir: PathBuf,
    input_format: Option<RdfFormat>,
    base_iri: Option<String>,
}

impl Default for Converter {
    /// Writes to the `result` directory.
    #[inline]
    fn default() -> Self {
        Self::new("result")
    }
}

impl Converter {
    /// Builds a converter writing into `output_dir`.
    ///
    /// The directory is created on the first [`emit`](Self::emit) if it does not exist.
    #[inline]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            input_format: None,
            base_iri: None,
        }
    }

    /// Forces the format of the loaded files.
    ///
    /// By default it is guessed from the file extension with [`input_format_from_path`].
    #[inline]
    #[must_use]
    pub fn with_input_format(mut self, format: RdfFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    /// Provides an IRI that is used to resolve the relative IRIs of the loaded files.
    ///
    /// The IRI is validated when a file is loaded.
    #[inline]
    #[must_use]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// The directory the output files are written to.
    #[inline]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Reads the graph stored in the file at `path`.
    ///
    /// Fails with [`LoadError::NotFound`] if there is no such file.
    /// Nothing is returned if the file content is invalid.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedGraph, LoadError> {
        let path = path.as_ref();
        debug!("Attempting to open {}", path.display());
        let file = File::open(path).map_err(|e| {
            let error = LoadError::from_open_error(path.to_owned(), e);
            error!("{error}");
            error
        })?;
        let format = self
            .input_format
            .unwrap_or_else(|| input_format_from_path(path));
        let start = Instant::now();
        let graph = self.load_from_reader(file, format)?;
        debug!(
            "Read {} triples from {} in {} seconds",
            graph.len(),
            path.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(graph)
    }

    /// Reads a graph serialized in `format` from a [`Read`] implementation.
    ///
    /// Reads are buffered.
    pub fn load_from_reader(
        &self,
        reader: impl Read,
        format: RdfFormat,
    ) -> Result<LoadedGraph, LoadError> {
        let mut parser = RdfParser::from_format(format);
        if let Some(base_iri) = &self.base_iri {
            parser = parser
                .with_base_iri(base_iri)
                .map_err(|error| LoadError::InvalidBaseIri {
                    iri: base_iri.clone(),
                    error,
                })?;
        }
        debug!("Reading {format} content");
        LoadedGraph::parse(parser, reader).map_err(|e| {
            error!("Invalid {format} content: {e}");
            e.into()
        })
    }

    /// Writes `graph` to `<output_dir>/<base_name>.<extension>` for each [`OutputFormat`].
    ///
    /// Each format is written on its own: a failure is recorded in the returned report and the next formats are still written.
    /// Each file is flushed and closed before the next one is opened.
    pub fn emit(&self, graph: &LoadedGraph, base_name: &str) -> EmitReport {
        let dir_error = fs::create_dir_all(&self.output_dir).err();
        let outcomes = OutputFormat::ALL
            .into_iter()
            .map(|format| {
                let path = self
                    .output_dir
                    .join(format!("{base_name}.{}", format.file_extension()));
                debug!("Writing to file in {format} format");
                let start = Instant::now();
                let result = match &dir_error {
                    Some(e) => Err(io::Error::new(e.kind(), e.to_string())),
                    None => write_file(graph, format, &path),
                };
                let elapsed = start.elapsed();
                let result = match result {
                    Ok(()) => {
                        debug!(
                            "Write success. Time taken = {} seconds",
                            elapsed.as_secs_f64()
                        );
                        Ok(())
                    }
                    Err(e) => {
                        let error = WriteError::new(format, path.clone(), e);
                        error!("{error}");
                        Err(error)
                    }
                };
                FormatOutcome {
                    format,
                    path,
                    elapsed,
                    result,
                }
            })
            .collect();
        let report = EmitReport { outcomes };
        info!(
            "Wrote {} of {} files for {base_name} in {}",
            report.written_files().count(),
            OutputFormat::ALL.len(),
            self.output_dir.display()
        );
        report
    }

    /// Loads the file at `input` and writes it with [`emit`](Self::emit).
    ///
    /// The triples are written as read, without any transformation.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        base_name: &str,
    ) -> Result<EmitReport, LoadError> {
        let graph = self.load(input)?;
        Ok(self.emit(&graph, base_name))
    }
}

fn write_file(graph: &LoadedGraph, format: OutputFormat, path: &Path) -> io::Result<()> {
    let mut serializer = RdfSerializer::from_format(format.rdf_format());
    for (name, iri) in graph.prefixes() {
        serializer = serializer
            .with_prefix(name, iri)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }
    // The graph iteration order changes with its hasher seed
    let mut triples = graph.graph().iter().collect::<Vec<_>>();
    triples.sort_by_cached_key(ToString::to_string);
    let mut writer = serializer.for_writer(BufWriter::new(File::create(path)?));
    for triple in triples {
        writer.serialize_triple(triple)?;
    }
    close_file_writer(writer.finish()?)
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

/// What happened to one of the files written by [`Converter::emit`].
#[derive(Debug)]
pub struct FormatOutcome {
    format: OutputFormat,
    path: PathBuf,
    elapsed: Duration,
    result: Result<(), WriteError>,
}

impl FormatOutcome {
    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wall-clock time spent serializing and writing the file.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn result(&self) -> Result<(), &WriteError> {
        self.result.as_ref().map(|&()| ())
    }
}

/// The outcome of [`Converter::emit`] for each [`OutputFormat`], in [`OutputFormat::ALL`] order.
#[derive(Debug)]
pub struct EmitReport {
    outcomes: Vec<FormatOutcome>,
}

impl EmitReport {
    #[inline]
    pub fn outcomes(&self) -> &[FormatOutcome] {
        &self.outcomes
    }

    /// The files that have been fully written.
    pub fn written_files(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(FormatOutcome::path)
    }

    /// The errors of the formats that could not be written.
    pub fn errors(&self) -> impl Iterator<Item = &WriteError> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err())
    }

    /// If all the formats have been written.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Returns the written files, or the first error if a format could not be written.
    pub fn into_result(self) -> Result<Vec<PathBuf>, WriteError> {
        self.outcomes
            .into_iter()
            .map(|outcome| outcome.result.map(|()| outcome.path))
            .collect()
    }
}
