mod case_dto;
mod report_dto;

pub use case_dto::{
    AddNoteDto, AssignmentDto, ChangeStatusDto, CreateActionDto, RatingDto, UpdateActionStatusDto,
};
pub use report_dto::{CreateReportDto, TrackingResponseDto};
