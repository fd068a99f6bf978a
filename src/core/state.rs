use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::Settings;
use crate::repositories::submissions::PgSubmissionStore;
use crate::services::collaborators::{ObjectStorage, TextGeneration};
use crate::services::hints::HintMediator;
use crate::services::submission_recorder::SubmissionRecorder;
use crate::services::tutor::TutorService;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
    storage: Option<Arc<dyn ObjectStorage>>,
    hints: HintMediator,
    tutor: TutorService,
}

impl AppState {
    /// Collaborators are injected here once; nothing below reaches for a global client.
    pub(crate) fn new(
        settings: Settings,
        db: PgPool,
        storage: Option<Arc<dyn ObjectStorage>>,
        generator: Option<Arc<dyn TextGeneration>>,
    ) -> Self {
        let hints = HintMediator::new(generator.clone());
        let tutor = TutorService::new(generator);
        Self { inner: Arc::new(InnerState { settings, db, storage, hints, tutor }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub(crate) fn storage(&self) -> Option<&Arc<dyn ObjectStorage>> {
        self.inner.storage.as_ref()
    }

    pub(crate) fn hints(&self) -> &HintMediator {
        &self.inner.hints
    }

    pub(crate) fn tutor(&self) -> &TutorService {
        &self.inner.tutor
    }

    /// `None` when object storage is not configured; uploads are refused in that case.
    pub(crate) fn submission_recorder(&self) -> Option<SubmissionRecorder> {
        let storage = self.inner.storage.clone()?;
        let store = Arc::new(PgSubmissionStore::new(self.inner.db.clone()));
        Some(SubmissionRecorder::new(storage, store))
    }
}
