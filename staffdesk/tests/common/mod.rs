#![allow(dead_code)]

use std::sync::Arc;

use staffdesk::db::seed::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use staffdesk::db::{KvStorage, MemoryStorage, SeedConfig, StorageError, StorageResult};
use staffdesk::{App, Config, Intent, PageData, Route, Severity, View};

use shared::models::LoginInput;

/// View that remembers everything the kernel told it
#[derive(Debug, Default)]
pub struct RecordingView {
    pub pages: Vec<(Route, PageData)>,
    pub results: Vec<(String, Severity)>,
    pub navigations: Vec<Route>,
}

impl RecordingView {
    pub fn last_page(&self) -> &(Route, PageData) {
        self.pages.last().expect("nothing rendered")
    }

    pub fn last_result(&self) -> &(String, Severity) {
        self.results.last().expect("nothing reported")
    }
}

impl View for RecordingView {
    fn render_page(&mut self, route: Route, data: &PageData) {
        self.pages.push((route, data.clone()));
    }

    fn report_result(&mut self, message: &str, severity: Severity) {
        self.results.push((message.to_string(), severity));
    }

    fn request_navigation(&mut self, route: Route) {
        self.navigations.push(route);
    }
}

/// Memory storage whose writes to the listed slots fail
#[derive(Debug, Default)]
pub struct FailingWrites {
    inner: MemoryStorage,
    failing: Vec<&'static str>,
}

impl FailingWrites {
    pub fn new(failing: &[&'static str]) -> Self {
        Self::with_slots(failing, [])
    }

    pub fn with_slots<const N: usize>(
        failing: &[&'static str],
        slots: [(&'static str, &'static str); N],
    ) -> Self {
        Self {
            inner: MemoryStorage::with_slots(slots),
            failing: failing.to_vec(),
        }
    }

    fn check(&self, key: &str) -> StorageResult<()> {
        if self.failing.contains(&key) {
            return Err(StorageError::Io(std::io::Error::other("quota exceeded")));
        }
        Ok(())
    }
}

impl KvStorage for FailingWrites {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

pub fn test_config() -> Config {
    let mut config = Config::with_data_dir("./unused");
    config.seed = SeedConfig::default();
    config
}

pub fn memory() -> Arc<dyn KvStorage> {
    Arc::new(MemoryStorage::new())
}

pub fn app_with(storage: Arc<dyn KvStorage>) -> App<RecordingView> {
    App::bootstrap(test_config(), storage, RecordingView::default()).expect("bootstrap")
}

pub fn app() -> App<RecordingView> {
    app_with(memory())
}

pub fn login(app: &mut App<RecordingView>, email: &str, password: &str) -> bool {
    app.submit_intent(Intent::Login(LoginInput {
        email: email.into(),
        password: password.into(),
    }))
    .success
}

pub fn login_admin(app: &mut App<RecordingView>) {
    assert!(login(app, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD));
}
