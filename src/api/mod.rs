pub(crate) mod dashboard;
pub(crate) mod errors;
pub(crate) mod gradebook;
pub(crate) mod guards;
pub(crate) mod handlers;
pub(crate) mod lessons;
pub(crate) mod quizzes;
pub(crate) mod router;
pub(crate) mod submissions;
pub(crate) mod users;
pub(crate) mod validation;
