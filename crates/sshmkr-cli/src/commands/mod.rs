//! Command implementations for sshmkr

pub mod add;
pub mod comment;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

pub use add::{run_add, run_copy};
pub use comment::run_comment;
pub use delete::run_delete;
pub use edit::run_edit;
pub use list::run_list;
pub use show::run_show;
