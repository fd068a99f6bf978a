pub(crate) mod collaborators;
pub(crate) mod dashboard;
pub(crate) mod gradebook;
pub(crate) mod hints;
pub(crate) mod quiz_engine;
pub(crate) mod search;
pub(crate) mod storage;
pub(crate) mod submission_naming;
pub(crate) mod submission_recorder;
pub(crate) mod text_generation;
pub(crate) mod tutor;
