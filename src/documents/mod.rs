//! Uploaded document handling
//!
//! - `validator` - extension allow-list, size limit, filename sanitizing
//! - `upload` - scoped temporary storage for an upload
//! - `extractor` - text extraction from stored PDF and TXT files

pub mod extractor;
pub mod upload;
pub mod validator;

pub use extractor::{extract, ExtractionError, MAX_PDF_PAGES};
pub use upload::ScopedUpload;
pub use validator::{check_size, is_allowed, sanitize_filename, DocumentKind};
