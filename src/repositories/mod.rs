pub(crate) mod health;
pub(crate) mod lessons;
pub(crate) mod profiles;
pub(crate) mod progress;
pub(crate) mod quizzes;
pub(crate) mod submissions;
