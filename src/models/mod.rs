pub mod assignment;
pub mod doctor;

// Re-export models for easy access
pub use assignment::{AssignmentRequest, AssignmentResult};
pub use doctor::{Doctor, DoctorRecord, Hospital, TaskRecord, TaskStatus};
