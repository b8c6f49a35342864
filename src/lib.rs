//! Discriminability of repeated weighted-graph measurements.
//!
//! Pipeline: [`parse`] edge lists, [`align`] them onto one vertex ordering,
//! build the dense [`tensor`], optionally normalize with [`ranks`], flatten to
//! [`features`], and score with [`discrim`]. [`pipeline`] composes the first
//! stages into one immutable [`pipeline::Ingestion`].

pub mod align;
pub mod cli;
pub mod config;
pub mod discrim;
pub mod error;
pub mod exit;
pub mod features;
pub mod fileset;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod ranks;
pub mod reporting;
pub mod tensor;
pub mod types;

pub use align::VertexSet;
pub use discrim::{discriminability, DiscrimOptions, DiscrimReport, RdfTable};
pub use error::{DiscrimError, Result};
pub use pipeline::{build_from_records, ingest, Ingestion};
pub use tensor::AdjacencyTensor;
pub use types::{Edge, GraphFile, GraphRecord};
