pub mod check;
pub mod config;
pub mod console;
pub mod create;
pub mod draft_file;
pub mod edit;
pub mod options;
pub mod submit;

pub use check::run_check;
pub use create::run_create;
pub use edit::run_edit;
pub use options::show_options;
pub use submit::SubmitOpts;
