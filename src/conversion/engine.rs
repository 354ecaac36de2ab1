//! Core conversion engine: walks data directories and writes JSON record
//! files under the mapped output tree

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::conversion::config::ConversionConfig;
use crate::conversion::path_mapping::{map_data_dir, map_file_name};
use crate::discovery::list_tabular_files;
use crate::error::{ConversionError, ConversionResult};
use crate::parser::{RecordSet, TabularParser};

/// Counts reported after a conversion run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub files_converted: usize,
    pub files_failed: usize,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
    parser: TabularParser,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        let parser = TabularParser::new().with_delimiter(config.delimiter.as_byte());
        Self { config, parser }
    }

    /// Convert every tabular file in every data directory, mirroring the
    /// directory structure under `output_root`.
    ///
    /// Directories and files are processed strictly in sequence. The first
    /// error terminates the run: outputs already written remain on disk,
    /// later files are simply absent, and nothing is rolled back. With
    /// `continue_on_error` set, a failing file is reported and skipped
    /// instead.
    pub fn convert(
        &self,
        data_dirs: &[PathBuf],
        input_root: &Path,
        output_root: &Path,
    ) -> ConversionResult<RunSummary> {
        let mut summary = RunSummary::default();

        for data_dir in data_dirs {
            let output_dir = map_data_dir(data_dir, input_root, output_root);
            let files = list_tabular_files(data_dir, &self.config.input_extension)?;

            for input_file in files {
                let output_file = output_dir
                    .join(map_file_name(&input_file, &self.config.output_extension));

                match self.convert_single_file(&input_file, &output_file) {
                    Ok(_) => {
                        summary.files_converted += 1;
                        if !self.config.quiet {
                            println!("✓ {} -> {}", input_file.display(), output_file.display());
                        }
                    }
                    Err(e) => {
                        if self.config.continue_on_error {
                            summary.files_failed += 1;
                            eprintln!("✗ {}: {}", input_file.display(), e);
                        } else {
                            return Err(e);
                        }
                    }
                }
            }
        }

        Ok(summary)
    }

    /// Parse one file and write its record set as a JSON array.
    /// Directory creation is idempotent and tolerated per file; an existing
    /// output file is overwritten without warning.
    fn convert_single_file(&self, input_file: &Path, output_file: &Path) -> ConversionResult<()> {
        let records = self.parser.parse_file(input_file)?;

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent).map_err(|e| ConversionError::io(e, parent))?;
        }

        let json = serialize_records(&records)?;
        fs::write(output_file, json).map_err(|e| ConversionError::io(e, output_file))?;

        Ok(())
    }
}

/// Serialize a record set as a compact JSON array of objects.
fn serialize_records(records: &RecordSet) -> ConversionResult<String> {
    Ok(serde_json::to_string(records)?)
}
