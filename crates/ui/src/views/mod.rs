mod assistant;
mod home;
mod module;
mod state;
mod steps;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantPanel;
pub use home::HomeView;
pub use module::ModuleView;
pub use state::{ViewError, ViewState, view_state_from_resource};
