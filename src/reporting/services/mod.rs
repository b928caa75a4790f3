/// Domain services for the reporting layer
mod selection;
mod session;

pub use selection::SelectionState;
pub use session::MilestoneSession;
