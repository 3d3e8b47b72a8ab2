mod assessment;
mod module;
mod progress;
pub mod syllabus;

pub use assessment::{AssessmentError, Mcq, score_answers};
pub use module::ModuleId;
pub use progress::{
    ModuleProgress, ProgressError, ProgressOverview, ProgressSet, ProgressUpdate,
    QUESTIONS_PER_MODULE, format_duration,
};
pub use syllabus::SyllabusModule;
