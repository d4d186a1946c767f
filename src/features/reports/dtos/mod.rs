pub mod report_dto;

pub use report_dto::{
    CoordinateInput, CreateReportDto, ListReportsQuery, ReportCardDto, ReportFormDto,
    ReportPageDto, ReportResponseDto, ReportSubmission,
};
