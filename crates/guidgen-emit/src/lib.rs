//! guidgen Emit
//!
//! Renders and writes the generated C translation units.
//!
//! ## Modules
//!
//! - `emitter` - Text rendering of resolved header blocks
//! - `generator` - One full scan/filter/resolve/write run
//! - `concat` - Manifest-driven concatenation of source files

pub mod concat;
pub mod emitter;
pub mod generator;

pub use concat::ConcatGenerator;
pub use emitter::OutputEmitter;
pub use generator::{GeneratedOutput, GenerationReport, GuidGenerator};

use guidgen_core::{Error, Result};
use std::path::Path;

/// Replace `destination` with `text` in a single truncating write
pub fn write_output(destination: &Path, text: &str) -> Result<()> {
    std::fs::write(destination, text).map_err(|source| Error::WriteFile {
        path: destination.to_path_buf(),
        source,
    })
}
