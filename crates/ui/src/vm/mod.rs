mod module_vm;
mod overview_vm;

pub use module_vm::{ModuleCardVm, map_module_cards, module_icon};
pub use overview_vm::{OverviewVm, map_overview};
