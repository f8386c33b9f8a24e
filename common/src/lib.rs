//! Claim OCR Common Library
//!
//! CLI 与 Web(WASM) 共用的类型与会话逻辑

pub mod types;
pub mod error;
pub mod intake;
pub mod merge;
pub mod parser;
pub mod summary;
pub mod generate;
pub mod session;

pub use types::{ClaimFormState, FieldValue, OcrResult, PreviewHandle, UploadedFile};
pub use error::{Error, Result};
pub use intake::{AddReport, FileIntake, PreviewAllocator};
pub use merge::merge;
pub use parser::{decode_ocr_response, validate_submission, DEFAULT_OCR_ENDPOINT, FILES_FIELD, MAX_FILES};
pub use summary::{
    render_summary, ClaimSummary, NarrativePart, SectionBody, SummaryField, SummarySection, PLACEHOLDER,
};
pub use generate::{generate_document, AutoConfirm, Confirm, GenerateOutcome};
pub use session::ClaimSession;
