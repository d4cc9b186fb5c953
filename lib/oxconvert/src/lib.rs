#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod converter;
pub mod demo;
mod error;
mod format;
pub mod io;
mod loaded;
pub mod model;
mod query;

pub use converter::{Converter, EmitReport, FormatOutcome};
pub use error::{LoadError, TypeMismatchError, WriteError};
pub use format::{OutputFormat, input_format_from_name, input_format_from_path};
pub use loaded::LoadedGraph;
pub use query::property_values;
