//! GUID Generator
//!
//! Runs the whole pipeline once: scan the include tree, drop ignored headers,
//! resolve every declaration, render and write the output file.

use crate::emitter::OutputEmitter;
use crate::write_output;
use guidgen_core::{
    is_valid_identifier, Error, GeneratorConfig, GuidDeclaration, HeaderBlock, HeaderFile, Result,
};
use guidgen_naming::{IdentifierResolver, OverrideTable};
use guidgen_parser::{ConflictFilter, HeaderScanner, IgnoreSet};
use tracing::{debug, info};

/// Counters for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Headers declaring at least one GUID
    pub headers_scanned: usize,
    /// Headers dropped by the conflict filter
    pub headers_excluded: usize,
    /// Headers that got an include
    pub headers_emitted: usize,
    /// Definition lines written
    pub declarations_emitted: usize,
    /// Definitions whose macro came from the override table
    pub overrides_applied: usize,
}

/// Rendered text together with its report
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    pub text: String,
    pub report: GenerationReport,
}

/// GUID definition generator
pub struct GuidGenerator {
    config: GeneratorConfig,
    scanner: HeaderScanner,
    filter: ConflictFilter,
    overrides: OverrideTable,
    emitter: OutputEmitter,
}

impl GuidGenerator {
    /// Build the scanner, filter and override table for `config`
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if !is_valid_identifier(&config.guid_type) {
            return Err(Error::Config(format!(
                "GUID type {:?} is not a C identifier",
                config.guid_type
            )));
        }

        let scanner = HeaderScanner::new(&config.guid_type)?;
        let filter = ConflictFilter::new(IgnoreSet::builtin().extend(&config.ignore));
        let overrides = OverrideTable::builtin().with_entries(config.overrides.iter().cloned())?;
        let emitter = OutputEmitter::new(&config.guid_type, &config.foundation_include);

        debug!(
            "Generator ready: {} overrides, {} ignored paths",
            overrides.len(),
            filter.ignore_set().paths().count()
        );

        Ok(Self {
            config,
            scanner,
            filter,
            overrides,
            emitter,
        })
    }

    /// Replace the override table
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve every declaration of the given headers
    ///
    /// Headers must already be filtered. Returns the blocks in input order
    /// and the number of declarations that used an override.
    pub fn resolve_headers(&self, headers: Vec<HeaderFile>) -> (Vec<HeaderBlock>, usize) {
        let resolver = IdentifierResolver::new(&self.overrides);
        let mut overrides_applied = 0;

        let blocks = headers
            .into_iter()
            .map(|header| {
                info!("{}", header.path());
                let declarations = header
                    .identifiers()
                    .iter()
                    .map(|identifier| {
                        let resolution = resolver.resolve(identifier);
                        if resolution.overridden {
                            overrides_applied += 1;
                            debug!("{} corrected to {}", resolution.candidate, resolution.macro_name);
                        }
                        info!("{}", resolution.macro_name);
                        GuidDeclaration::new(identifier.as_str(), resolution.macro_name)
                    })
                    .collect();
                HeaderBlock {
                    header,
                    declarations,
                }
            })
            .collect();

        (blocks, overrides_applied)
    }

    /// Scan, filter, resolve and render without touching the output file
    pub fn generate(&self) -> Result<GeneratedOutput> {
        let scanned = self.scanner.scan_directory(&self.config.include_root)?;
        let headers_scanned = scanned.len();

        let kept = self.filter.retain(scanned);
        let headers_excluded = headers_scanned - kept.len();

        let (blocks, overrides_applied) = self.resolve_headers(kept);
        let text = self.emitter.render(&blocks);

        let report = GenerationReport {
            headers_scanned,
            headers_excluded,
            headers_emitted: blocks.iter().filter(|b| !b.declarations.is_empty()).count(),
            declarations_emitted: blocks.iter().map(|b| b.declarations.len()).sum(),
            overrides_applied,
        };

        Ok(GeneratedOutput { text, report })
    }

    /// Generate and overwrite the configured output file
    pub fn run(&self) -> Result<GenerationReport> {
        let output = self.generate()?;
        write_output(&self.config.output, &output.text)?;

        info!(
            "Wrote {} definitions from {} headers to {}",
            output.report.declarations_emitted,
            output.report.headers_emitted,
            self.config.output.display()
        );
        Ok(output.report)
    }
}
