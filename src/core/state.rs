use crate::config::Config;
use crate::domain::TokenSource;
use crate::infrastructure::catalog::Catalog;
use crate::mode::Mode;

pub mod approval;
pub mod audit;
pub mod dashboard;
pub mod documents;
pub mod draft;
pub mod search;
pub mod shell;
pub mod system;

pub use approval::ApprovalState;
pub use audit::AuditState;
pub use dashboard::DashboardState;
pub use documents::DocumentsState;
pub use draft::DraftState;
pub use search::SearchState;
pub use shell::{Panel, ShellState};
pub use system::SystemState;

/// Unified application state.
///
/// Every slice is plain data; the only way to change it is through
/// [`crate::core::update`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub shell: ShellState,
    pub dashboard: DashboardState,
    pub documents: DocumentsState,
    pub search: SearchState,
    pub draft: DraftState,
    pub approval: ApprovalState,
    pub audit: AuditState,
    pub system: SystemState,
    pub config: ConfigState,
    /// Issuer for oracle request tokens, shared by all panels.
    pub tokens: TokenSource,
}

/// Configuration state, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    /// Build the initial state from the data-source collaborator. The core
    /// never fetches; whatever the catalog hands over is all there is.
    pub fn from_catalog(catalog: &dyn Catalog) -> Self {
        Self {
            dashboard: DashboardState::new(catalog.dashboard_stats(), catalog.dashboard_rfps()),
            documents: DocumentsState::with_documents(catalog.documents()),
            search: SearchState::with_popular(catalog.popular_queries()),
            approval: ApprovalState::with_rfps(catalog.review_rfps()),
            audit: AuditState::with_entries(catalog.audit_entries()),
            ..Self::default()
        }
    }

    pub fn from_catalog_with_config(catalog: &dyn Catalog, config: Config) -> Self {
        Self {
            shell: ShellState::new(config.default_role),
            config: ConfigState { config },
            ..Self::from_catalog(catalog)
        }
    }

    /// Input mode of the visible panel, used for keybinding lookup.
    pub fn mode(&self) -> Mode {
        let editing = match self.shell.panel {
            Panel::Dashboard => false,
            Panel::Documents => self.documents.editing,
            Panel::Search => self.search.editing,
            Panel::Draft => self.draft.focus.is_some(),
            Panel::Approval => self.approval.editing,
            Panel::Audit => self.audit.editing,
        };
        if editing {
            Mode::Editing
        } else {
            Mode::Normal
        }
    }

    /// True while any panel has an oracle request in flight.
    pub fn is_busy(&self) -> bool {
        self.search.is_pending() || self.draft.is_pending()
    }
}
