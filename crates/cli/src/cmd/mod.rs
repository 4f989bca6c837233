mod apply;
mod clean;

pub use apply::cmd_apply;
pub use clean::cmd_clean;
