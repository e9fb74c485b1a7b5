use crate::db::CredentialStore;
use crate::views::Theme;

/// Shared application state passed to every route handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub theme: &'static Theme,
}

impl AppState {
    pub fn new(store: CredentialStore, theme: &'static Theme) -> Self {
        Self { store, theme }
    }
}
