//! Directory batch drivers.
//!
//! Every driver runs sequentially and stops at the first error. Files written
//! before the error stay on disk.

mod extract;
mod flat;
mod generate;

pub use extract::{extract_files, extract_records, list_xml_files};
pub use flat::{flatten_files, safe_date, safe_name, unflatten_sheet};
pub use generate::{generate_batch, parse_count, prepare_output_dir, FileNaming};
