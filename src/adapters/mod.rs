// Adapters layer: concrete collaborators, storage and result rendering.

pub mod file_source;
pub mod http_source;
pub mod output;
pub mod storage;

use crate::config::{SourceKind, SourceSpec};
use crate::core::RecordSource;
use crate::utils::error::Result;
use file_source::FileSource;
use http_source::HttpSource;
use storage::LocalStorage;

/// Builds the collaborator described by `spec`, chosen at runtime.
pub fn build_source(name: &str, spec: &SourceSpec) -> Result<Box<dyn RecordSource>> {
    let source: Box<dyn RecordSource> = match spec.r#type {
        SourceKind::File => Box::new(FileSource::new(
            name,
            &spec.location,
            LocalStorage::current_dir(),
        )),
        SourceKind::Http => Box::new(HttpSource::new(name, &spec.location, spec.timeout())?),
    };
    tracing::debug!("Using {:?} source for {}: {}", spec.r#type, name, spec.location);
    Ok(source)
}
