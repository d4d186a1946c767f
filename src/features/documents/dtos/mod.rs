pub mod document_dto;

pub use document_dto::{CreateDocumentDto, DocumentResponseDto, DocumentSummaryDto};
