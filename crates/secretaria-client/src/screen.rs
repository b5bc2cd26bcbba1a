//! The generalized CRUD screen controller.
//!
//! One controller per screen. It owns the screen's load state machine
//! (`Idle → Loading → {Loaded | Errored}`), consults the authorization rule
//! engine before any mutating request, and refreshes the list after every
//! successful mutation.
//!
//! Loads are re-entrant: each carries a generation number, and a response
//! is committed only while its generation is still the newest. A newer
//! `load()` therefore supersedes an in-flight one — the stale response is
//! disregarded when it eventually arrives, it is not cancelled.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use validator::Validate;

use secretaria_auth::{Action, ensure};
use secretaria_core::{ApiError, ListFilter, apply_filter};

use crate::http::ApiClient;
use crate::resource::{Collection, UpdateStyle};

/// Load state of one screen.
#[derive(Debug, Clone, Default)]
pub enum ScreenState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<T>),
    Errored(ApiError),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Errored(err) => Some(err),
            _ => None,
        }
    }
}

/// The explicit yes/no gate in front of deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// What `remove` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined; no request was sent.
    Cancelled,
}

/// CRUD controller for one entity screen.
pub struct ScreenController<C: Collection> {
    client: Arc<ApiClient>,
    query: Vec<(String, String)>,
    generation: AtomicU64,
    state: RwLock<ScreenState<C::Record>>,
    _collection: PhantomData<C>,
}

impl<C: Collection> ScreenController<C> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            query: Vec::new(),
            generation: AtomicU64::new(0),
            state: RwLock::new(ScreenState::Idle),
            _collection: PhantomData,
        }
    }

    /// Scope the collection server-side (e.g. `("aluno", "3")` to list one
    /// student's records).
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Current state snapshot.
    pub fn state(&self) -> ScreenState<C::Record> {
        self.state.read().expect("screen state lock").clone()
    }

    /// The loaded records; empty unless the screen is `Loaded`.
    pub fn records(&self) -> Vec<C::Record> {
        match &*self.state.read().expect("screen state lock") {
            ScreenState::Loaded(records) => records.clone(),
            _ => Vec::new(),
        }
    }

    /// The loaded records narrowed by client-side criteria.
    pub fn filtered<F: ListFilter<C::Record>>(&self, filter: &F) -> Vec<C::Record> {
        apply_filter(&self.records(), filter)
    }

    /// Fetch the collection and commit it, unless a newer load supersedes
    /// this one first.
    ///
    /// Errors (a 403 included) leave the screen `Errored` with an empty
    /// record set; they are returned for the caller to surface but never
    /// panic or propagate further.
    pub async fn load(&self) -> Result<(), ApiError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().expect("screen state lock") = ScreenState::Loading;

        let result = self
            .client
            .get_list::<C::Record>(C::PATH, &self.query)
            .await;

        let mut state = self.state.write().expect("screen state lock");
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer load owns the screen now; drop this response.
            return Ok(());
        }
        match result {
            Ok(records) => {
                *state = ScreenState::Loaded(records);
                Ok(())
            }
            Err(err) => {
                *state = ScreenState::Errored(err.clone());
                Err(err)
            }
        }
    }

    /// Create a record, then refresh the list.
    ///
    /// The payload is validated locally and the action authorized against
    /// the rule table before any request is sent.
    pub async fn create(&self, payload: &C::Create) -> Result<(), ApiError> {
        payload.validate()?;
        ensure(self.client.role(), Action::Create, C::KIND)?;
        self.client.post(C::PATH, payload).await?;
        self.load().await
    }

    /// Update a record, then refresh the list.
    pub async fn update(&self, id: C::Id, payload: &C::Update) -> Result<(), ApiError> {
        payload.validate()?;
        ensure(self.client.role(), Action::Update, C::KIND)?;
        match C::UPDATE_STYLE {
            UpdateStyle::Put => self.client.put(C::PATH, id, payload).await?,
            UpdateStyle::Patch => self.client.patch(C::PATH, id, payload).await?,
        }
        self.load().await
    }

    /// Delete a record behind an explicit confirmation gate, then refresh.
    pub async fn remove(
        &self,
        id: C::Id,
        confirmation: Confirmation,
    ) -> Result<RemoveOutcome, ApiError> {
        if confirmation == Confirmation::Cancelled {
            return Ok(RemoveOutcome::Cancelled);
        }
        ensure(self.client.role(), Action::Delete, C::KIND)?;
        self.client.delete(C::PATH, id).await?;
        self.load().await?;
        Ok(RemoveOutcome::Removed)
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}

impl ScreenController<crate::resource::Loans> {
    /// Register a loan's return (`POST /emprestimos/{id}/devolver/`), then
    /// refresh the list.
    pub async fn return_loan(&self, id: secretaria_models::LoanId) -> Result<(), ApiError> {
        ensure(
            self.client.role(),
            Action::Update,
            secretaria_auth::ResourceKind::Loans,
        )?;
        self.client
            .post_action(crate::resource::Loans::PATH, id, "devolver")
            .await?;
        self.load().await
    }
}
