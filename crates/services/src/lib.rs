#![forbid(unsafe_code)]

pub mod app_services;
pub mod assistant_service;
pub mod error;
pub mod progress_service;

pub use studio_core::Clock;

pub use app_services::AppServices;
pub use assistant_service::{AssistantConfig, AssistantService};
pub use error::{AppServicesError, AssistantError, ProgressServiceError};
pub use progress_service::ProgressService;
