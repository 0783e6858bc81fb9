//! Application-level state.

use dcs_api::{CleanerClient, RecentUpload};
use dcs_session::Session;

use crate::settings::Settings;

/// Root state of the application.
///
/// The cleaning workflow itself lives entirely inside [`Session`]; this
/// struct only adds the shell concerns around it.
pub struct AppState {
    /// The one active cleaning session.
    pub session: Session,
    /// Backend client. `None` when the HTTP client could not be built;
    /// the view surfaces that as a blocking error.
    pub client: Option<CleanerClient>,
    /// Previously uploaded files offered on the Upload view.
    pub recent: Vec<RecentUpload>,
    /// Persisted application settings.
    pub settings: Settings,
}

impl AppState {
    /// Build the initial state from loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        let client = match CleanerClient::new(&settings.server_url) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!("Failed to create backend client: {err}");
                None
            }
        };

        Self {
            session: Session::new(),
            client,
            recent: Vec::new(),
            settings,
        }
    }
}
