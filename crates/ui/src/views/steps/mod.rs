mod assessment;
mod lesson;
mod live_preview;
mod practice;
mod summary;

pub use assessment::AssessmentStep;
pub use lesson::LessonStep;
pub use live_preview::LivePreviewStep;
pub use practice::PracticeStep;
pub use summary::SummaryStep;
