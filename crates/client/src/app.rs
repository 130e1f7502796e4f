//! Client session lifecycle and catalog actions.
//!
//! [`CatalogApp`] owns the API client, the token store, and the current
//! [`Session`]. Any protected call that comes back 401/403 drops the
//! session and clears the stored token before the error surfaces.

use shelf_core::types::DbId;

use crate::api::{ApiClient, ClientError};
use crate::store::TokenStore;
use crate::table::{EditDraft, TableView};

/// Either waiting at the login prompt or holding a live token plus the
/// fetched catalog.
#[derive(Debug)]
pub enum Session {
    Unauthenticated,
    Authenticated {
        token: String,
        table: TableView,
        editing: Option<(DbId, EditDraft)>,
    },
}

/// The client application: session state plus the actions the command
/// loop drives.
pub struct CatalogApp {
    api: ApiClient,
    store: TokenStore,
    session: Session,
}

impl CatalogApp {
    pub fn new(api: ApiClient, store: TokenStore) -> Self {
        Self {
            api,
            store,
            session: Session::Unauthenticated,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated { .. })
    }

    pub fn table(&self) -> Option<&TableView> {
        match &self.session {
            Session::Authenticated { table, .. } => Some(table),
            Session::Unauthenticated => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut TableView> {
        match &mut self.session {
            Session::Authenticated { table, .. } => Some(table),
            Session::Unauthenticated => None,
        }
    }

    pub fn editing(&self) -> Option<&(DbId, EditDraft)> {
        match &self.session {
            Session::Authenticated { editing, .. } => editing.as_ref(),
            Session::Unauthenticated => None,
        }
    }

    pub fn editing_mut(&mut self) -> Option<&mut (DbId, EditDraft)> {
        match &mut self.session {
            Session::Authenticated { editing, .. } => editing.as_mut(),
            Session::Unauthenticated => None,
        }
    }

    // -----------------------------------------------------------------------
    // Session transitions
    // -----------------------------------------------------------------------

    /// Resume a previous session from the token file, if a token is stored
    /// and the backend still accepts it.
    ///
    /// Returns `Ok(true)` if a session was resumed. A rejected token is
    /// cleared and reported as `Ok(false)`, the same as no token at all.
    pub async fn try_resume(&mut self) -> Result<bool, ClientError> {
        let Some(token) = self.store.load() else {
            return Ok(false);
        };

        match self.api.list_products(&token).await {
            Ok(products) => {
                self.session = Session::Authenticated {
                    token,
                    table: TableView::new(products),
                    editing: None,
                };
                Ok(true)
            }
            Err(ClientError::SessionExpired) => {
                self.clear_stored_token();
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Register a new account. Returns the backend's confirmation message.
    /// Does not log in.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ClientError> {
        self.api.register(username, password).await
    }

    /// Log in, persist the token, and fetch the initial product list.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let token = self.api.login(username, password).await?;

        if let Err(e) = self.store.save(&token) {
            let path = self.store.path().display();
            tracing::warn!(error = %e, %path, "Failed to persist session token");
        }

        let result = self.api.list_products(&token).await;
        let products = self.check(result)?;

        self.session = Session::Authenticated {
            token,
            table: TableView::new(products),
            editing: None,
        };
        Ok(())
    }

    /// Drop the session and remove the stored token.
    pub fn logout(&mut self) {
        self.clear_stored_token();
        self.session = Session::Unauthenticated;
    }

    // -----------------------------------------------------------------------
    // Catalog actions
    // -----------------------------------------------------------------------

    /// Re-run the list fetch and replace the table contents.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;
        let result = self.api.list_products(&token).await;
        let products = self.check(result)?;

        if let Session::Authenticated { table, .. } = &mut self.session {
            table.replace_all(products);
        }
        Ok(())
    }

    /// Start editing a product, replacing any draft in progress.
    pub fn begin_edit(&mut self, id: DbId) -> Result<(), ClientError> {
        let Session::Authenticated { table, editing, .. } = &mut self.session else {
            return Err(ClientError::NotLoggedIn);
        };

        let Some(product) = table.find(id) else {
            return Err(ClientError::UnknownProduct(id));
        };

        *editing = Some((id, EditDraft::from_product(product)));
        Ok(())
    }

    /// Discard the draft in progress, if any.
    pub fn cancel_edit(&mut self) {
        if let Session::Authenticated { editing, .. } = &mut self.session {
            *editing = None;
        }
    }

    /// Parse the draft, send the update, then refetch the whole list.
    ///
    /// A draft that fails to parse stays in place so the user can fix it;
    /// a sent update always ends the edit.
    pub async fn save_edit(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;

        let Some((id, draft)) = self.editing() else {
            return Err(ClientError::NoDraft);
        };
        let id = *id;
        let patch = draft.to_patch()?;

        let result = self.api.update_product(&token, id, &patch).await;
        self.check(result)?;

        self.cancel_edit();
        self.refresh().await
    }

    /// Delete a product, then drop it from the local list; no refetch.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        let token = self.token()?;

        let result = self.api.delete_product(&token, id).await;
        self.check(result)?;

        if let Session::Authenticated { table, .. } = &mut self.session {
            table.remove(id);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn token(&self) -> Result<String, ClientError> {
        match &self.session {
            Session::Authenticated { token, .. } => Ok(token.clone()),
            Session::Unauthenticated => Err(ClientError::NotLoggedIn),
        }
    }

    /// Drop the session on a 401/403 before surfacing the error.
    fn check<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(ClientError::SessionExpired) = &result {
            self.clear_stored_token();
            self.session = Session::Unauthenticated;
        }
        result
    }

    fn clear_stored_token(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to remove token file");
        }
    }
}
