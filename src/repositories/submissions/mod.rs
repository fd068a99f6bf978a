mod commands;
mod queries;
mod store;
mod types;

pub(crate) use commands::insert;
pub(crate) use queries::list_gradebook;
pub(crate) use store::PgSubmissionStore;
pub(crate) use types::GradebookRow;
