pub mod context;
pub mod floating_nav;
pub mod toast;

pub use context::DashboardContext;
