use std::sync::Arc;

use shared::error::{AppResult, ErrorKind};
use shared::intent::{Intent, IntentOutcome};
use shared::route::Route;

use super::{AppState, Config};
use crate::db::KvStorage;
use crate::handler::{self, pages};
use crate::view::{Severity, View};

/// The kernel bound to a view
///
/// ```no_run
/// use std::sync::Arc;
/// use staffdesk::db::FileStorage;
/// use staffdesk::view::LogView;
/// use staffdesk::{App, Config};
///
/// let config = Config::from_env();
/// let storage = Arc::new(FileStorage::open(&config.data_dir)?);
/// let mut app = App::bootstrap(config, storage, LogView)?;
/// app.open("#/login");
/// app.shutdown()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct App<V: View> {
    state: AppState,
    view: V,
}

impl<V: View> std::fmt::Debug for App<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V: View> App<V> {
    /// Load state and render the home page
    ///
    /// Fails with `StorageCorrupted` when the stored blob cannot be read;
    /// see [`App::bootstrap_reseeded`].
    pub fn bootstrap(config: Config, storage: Arc<dyn KvStorage>, view: V) -> AppResult<Self> {
        let state = AppState::initialize(config, storage)?;
        Ok(Self::start(state, view))
    }

    /// Bootstrap after replacing the stored collections with the defaults
    pub fn bootstrap_reseeded(
        config: Config,
        storage: Arc<dyn KvStorage>,
        view: V,
    ) -> AppResult<Self> {
        let state = AppState::initialize_reseeded(config, storage)?;
        Ok(Self::start(state, view))
    }

    fn start(state: AppState, view: V) -> Self {
        let mut app = Self { state, view };
        let home = app.state.router.current();
        app.navigate(home);
        app
    }

    /// Enter the route named by a URL fragment (unknown fragments go home)
    pub fn open(&mut self, fragment: &str) -> Route {
        self.navigate(Route::from_fragment(fragment))
    }

    /// Enter `target` through the guard and render the resulting page
    ///
    /// Returns the route actually entered.
    pub fn navigate(&mut self, target: Route) -> Route {
        let route = self.state.router.enter(target, self.state.session.current());
        self.view.request_navigation(route);

        match pages::page_data(&self.state, route) {
            Ok(data) => self.view.render_page(route, &data),
            Err(e) => {
                tracing::warn!(route = %route, error = %e, "Page data unavailable");
                self.view.report_result(&e.message, Severity::Danger);
            }
        }
        route
    }

    /// Apply one user intent
    ///
    /// On success the view gets the result message and the current (or
    /// requested) route is entered again, so the guard sees the new session.
    /// On failure the view gets the error message and nothing changes.
    pub fn submit_intent(&mut self, intent: Intent) -> IntentOutcome {
        let name = intent.name();
        tracing::debug!(intent = name, "Dispatching intent");

        match handler::dispatch(&mut self.state, intent) {
            Ok(reply) => {
                if let Some((message, severity)) = &reply.notice {
                    self.view.report_result(message, *severity);
                }
                let target = reply.navigate.unwrap_or_else(|| self.state.router.current());
                self.navigate(target);

                match &reply.id {
                    Some(id) => IntentOutcome::ok_with_id(reply.message(), id.as_str()),
                    None => IntentOutcome::ok(reply.message()),
                }
            }
            Err(err) => {
                if err.kind() == ErrorKind::Persistence {
                    tracing::error!(intent = name, code = err.code.code(), error = %err, "Intent failed to persist");
                } else {
                    tracing::info!(intent = name, code = err.code.code(), error = %err, "Intent rejected");
                }
                self.view.report_result(&err.message, Severity::Danger);
                IntentOutcome::err(&err)
            }
        }
    }

    /// Flush the collections one last time
    pub fn shutdown(self) -> AppResult<()> {
        self.state.store.save()?;
        tracing::info!("Kernel shut down");
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn current_route(&self) -> Route {
        self.state.router.current()
    }
}
