//! The auto-update notifier hook.

use std::sync::Arc;

use tracing::{debug, info, warn};

use sidekick_host::{ConfigErrorStore, HostEvent, ToastClient, ToastRequest};

use crate::cache::VersionCache;
use crate::checker::{UpdateCheckResult, UpdateChecker};
use crate::PACKAGE_NAME;

const STARTUP_TOAST_DURATION_MS: u64 = 5000;
const UPDATE_TOAST_DURATION_MS: u64 = 8000;
const CONFIG_ERROR_TOAST_DURATION_MS: u64 = 10000;

/// Options controlling the notifier's behavior.
#[derive(Debug, Clone)]
pub struct NotifierOptions {
    /// Show an informational toast on startup even when no update is due.
    pub show_startup_toast: bool,
}

impl Default for NotifierOptions {
    fn default() -> Self {
        Self {
            show_startup_toast: true,
        }
    }
}

/// Hook that checks for updates once per process and drives toasts.
///
/// The `has_checked` latch is owned here, constructed by the host's plugin
/// wiring and scoped to one process run. It is never reset; repeated
/// `session.created` events and subagent sessions are ignored.
pub struct UpdateNotifier {
    checker: Arc<dyn UpdateChecker>,
    toasts: Arc<dyn ToastClient>,
    cache: Arc<dyn VersionCache>,
    config_errors: Arc<dyn ConfigErrorStore>,
    options: NotifierOptions,
    has_checked: bool,
}

impl UpdateNotifier {
    /// Create a notifier with default options.
    pub fn new(
        checker: Arc<dyn UpdateChecker>,
        toasts: Arc<dyn ToastClient>,
        cache: Arc<dyn VersionCache>,
        config_errors: Arc<dyn ConfigErrorStore>,
    ) -> Self {
        Self {
            checker,
            toasts,
            cache,
            config_errors,
            options: NotifierOptions::default(),
            has_checked: false,
        }
    }

    /// Override the default options.
    pub fn with_options(mut self, options: NotifierOptions) -> Self {
        self.options = options;
        self
    }

    /// Handle a host lifecycle event.
    ///
    /// Runs the update check on the first root `session.created` event of
    /// the process; every failure along the way is contained here and never
    /// propagates to the host. Accumulated config-load errors are surfaced
    /// after the update-needed branch (whether or not its toast landed) and
    /// after a failed check; the quiet branches leave the store alone.
    pub async fn handle_event(&mut self, event: &HostEvent) {
        if !event.is_root_session_created() {
            return;
        }
        if self.has_checked {
            return;
        }
        self.has_checked = true;

        let reached_update_branch = match self.checker.check().await {
            Ok(result) => self.notify(&result).await,
            Err(e) => {
                warn!("Update check failed: {}", e);
                true
            }
        };

        if reached_update_branch {
            self.surface_config_errors().await;
        }
    }

    /// Branch on the check outcome. Returns true only when the flow ran
    /// through the update-needed branch.
    async fn notify(&self, result: &UpdateCheckResult) -> bool {
        if result.is_local_dev {
            debug!("Update check skipped: local development build");
            if self.options.show_startup_toast {
                self.show_version_toast(result.current_version.as_deref())
                    .await;
            }
            return false;
        }

        if result.is_pinned {
            debug!(
                "Update check skipped: version pinned to {}",
                display_version(result.current_version.as_deref())
            );
            if self.options.show_startup_toast {
                self.show_version_toast(result.current_version.as_deref())
                    .await;
            }
            return false;
        }

        if !result.needs_update() {
            debug!("No update needed");
            if self.options.show_startup_toast {
                self.show_version_toast(result.current_version.as_deref())
                    .await;
            }
            return false;
        }

        // Drop the cached metadata entry before telling the user to restart.
        self.cache.invalidate(PACKAGE_NAME);

        let latest = display_version(result.latest_version.as_deref());
        self.show(ToastRequest::info(
            format!("Sidekick {latest}"),
            format!("Sidekick v{latest} available. Restart to apply."),
            UPDATE_TOAST_DURATION_MS,
        ))
        .await;

        info!(
            "Update notification sent: v{} -> v{}",
            display_version(result.current_version.as_deref()),
            latest
        );

        true
    }

    async fn show_version_toast(&self, version: Option<&str>) {
        let version_label = display_version(version);
        self.show(ToastRequest::info(
            format!("Sidekick {version_label}"),
            "Sidekick is active.",
            STARTUP_TOAST_DURATION_MS,
        ))
        .await;
        debug!("Startup toast shown: v{version_label}");
    }

    async fn surface_config_errors(&self) {
        let errors = self.config_errors.all();
        if errors.is_empty() {
            return;
        }

        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        self.show(ToastRequest::error(
            "Config Load Error",
            format!("Failed to load config:\n{joined}"),
            CONFIG_ERROR_TOAST_DURATION_MS,
        ))
        .await;

        info!("Config load errors shown: {} error(s)", errors.len());
        self.config_errors.clear();
    }

    /// Fire-and-forget toast delivery.
    async fn show(&self, request: ToastRequest) {
        if let Err(e) = self.toasts.show_toast(request).await {
            debug!("Toast delivery failed: {}", e);
        }
    }
}

fn display_version(version: Option<&str>) -> &str {
    version.unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use sidekick_host::{
        ConfigErrorBuffer, ConfigLoadError, HostError, HostResult, ToastVariant,
    };

    use crate::error::{UpdateError, UpdateResult};

    struct FakeChecker {
        result: UpdateCheckResult,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeChecker {
        fn ok(result: UpdateCheckResult) -> Arc<Self> {
            Arc::new(Self {
                result,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                result: UpdateCheckResult::default(),
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UpdateChecker for FakeChecker {
        async fn check(&self) -> UpdateResult<UpdateCheckResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(UpdateError::ConnectionFailed {
                    message: "registry unreachable".to_string(),
                })
            } else {
                Ok(self.result.clone())
            }
        }
    }

    #[derive(Default)]
    struct RecordingToasts {
        shown: Mutex<Vec<ToastRequest>>,
        fail: bool,
    }

    impl RecordingToasts {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                shown: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn shown(&self) -> Vec<ToastRequest> {
            self.shown.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToastClient for RecordingToasts {
        async fn show_toast(&self, request: ToastRequest) -> HostResult<()> {
            if self.fail {
                return Err(HostError::toast_failed("tui unavailable"));
            }
            self.shown.lock().unwrap().push(request);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingCache {
        invalidated: Mutex<Vec<String>>,
    }

    impl RecordingCache {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn invalidated(&self) -> Vec<String> {
            self.invalidated.lock().unwrap().clone()
        }
    }

    impl VersionCache for RecordingCache {
        fn invalidate(&self, package: &str) {
            self.invalidated.lock().unwrap().push(package.to_string());
        }
    }

    fn notifier(
        checker: Arc<FakeChecker>,
        toasts: Arc<RecordingToasts>,
        cache: Arc<RecordingCache>,
        errors: Arc<ConfigErrorBuffer>,
    ) -> UpdateNotifier {
        UpdateNotifier::new(checker, toasts, cache, errors)
    }

    #[tokio::test]
    async fn test_checks_once_per_process() {
        let checker = FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.0.0"));
        let toasts = RecordingToasts::new();
        let mut hook = notifier(
            checker.clone(),
            toasts,
            RecordingCache::new(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created()).await;
        hook.handle_event(&HostEvent::session_created()).await;

        assert_eq!(checker.calls(), 1);
    }

    #[tokio::test]
    async fn test_subagent_sessions_ignored() {
        let checker = FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.0.0"));
        let mut hook = notifier(
            checker.clone(),
            RecordingToasts::new(),
            RecordingCache::new(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created_with_parent("ses_1"))
            .await;
        assert_eq!(checker.calls(), 0);

        // The latch is untouched, so a later root session still checks.
        hook.handle_event(&HostEvent::session_created()).await;
        assert_eq!(checker.calls(), 1);
    }

    #[tokio::test]
    async fn test_other_events_ignored() {
        let checker = FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.0.0"));
        let mut hook = notifier(
            checker.clone(),
            RecordingToasts::new(),
            RecordingCache::new(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::new("session.idle")).await;
        assert_eq!(checker.calls(), 0);
    }

    #[tokio::test]
    async fn test_up_to_date_shows_startup_toast() {
        let toasts = RecordingToasts::new();
        let cache = RecordingCache::new();
        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.2.0", "1.2.0")),
            toasts.clone(),
            cache.clone(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        let shown = toasts.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Sidekick 1.2.0");
        assert_eq!(shown[0].variant, ToastVariant::Info);
        assert_eq!(shown[0].duration_ms, 5000);
        assert!(cache.invalidated().is_empty());
    }

    #[tokio::test]
    async fn test_update_branch_invalidates_cache_and_notifies() {
        let toasts = RecordingToasts::new();
        let cache = RecordingCache::new();
        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.3.0")),
            toasts.clone(),
            cache.clone(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        assert_eq!(cache.invalidated(), vec![PACKAGE_NAME.to_string()]);

        let shown = toasts.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Sidekick 1.3.0");
        assert!(shown[0].message.contains("v1.3.0 available"));
        assert!(shown[0].message.contains("Restart"));
        assert_eq!(shown[0].duration_ms, 8000);
    }

    #[tokio::test]
    async fn test_local_dev_falls_back_to_unknown_version() {
        let toasts = RecordingToasts::new();
        let cache = RecordingCache::new();
        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::local_dev(None)),
            toasts.clone(),
            cache.clone(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        let shown = toasts.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Sidekick unknown");
        assert!(cache.invalidated().is_empty());
    }

    #[tokio::test]
    async fn test_pinned_shows_pinned_version() {
        let toasts = RecordingToasts::new();
        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::pinned("0.9.1")),
            toasts.clone(),
            RecordingCache::new(),
            Arc::new(ConfigErrorBuffer::new()),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        let shown = toasts.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Sidekick 0.9.1");
    }

    #[tokio::test]
    async fn test_startup_toast_can_be_disabled() {
        let toasts = RecordingToasts::new();
        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.0.0")),
            toasts.clone(),
            RecordingCache::new(),
            Arc::new(ConfigErrorBuffer::new()),
        )
        .with_options(NotifierOptions {
            show_startup_toast: false,
        });

        hook.handle_event(&HostEvent::session_created()).await;

        assert!(toasts.shown().is_empty());
    }

    #[tokio::test]
    async fn test_checker_failure_is_contained() {
        let toasts = RecordingToasts::new();
        let errors = Arc::new(ConfigErrorBuffer::new());
        errors.record(ConfigLoadError::new("/tmp/app.json", "bad json"));

        let mut hook = notifier(
            FakeChecker::failing(),
            toasts.clone(),
            RecordingCache::new(),
            errors.clone(),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        // Config errors are still surfaced after a failed check.
        let shown = toasts.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Config Load Error");
        assert_eq!(shown[0].variant, ToastVariant::Error);
        assert_eq!(shown[0].duration_ms, 10000);
        assert!(shown[0].message.contains("/tmp/app.json: bad json"));
        assert!(errors.all().is_empty());
    }

    #[tokio::test]
    async fn test_config_errors_joined_and_cleared_after_update_branch() {
        let toasts = RecordingToasts::new();
        let errors = Arc::new(ConfigErrorBuffer::new());
        errors.record(ConfigLoadError::new("/a.json", "one"));
        errors.record(ConfigLoadError::new("/b.json", "two"));

        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.1.0")),
            toasts.clone(),
            RecordingCache::new(),
            errors.clone(),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        let shown = toasts.shown();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].title, "Config Load Error");
        assert!(shown[1].message.contains("/a.json: one\n/b.json: two"));
        assert!(errors.all().is_empty());
    }

    #[tokio::test]
    async fn test_quiet_branches_leave_config_errors_alone() {
        let toasts = RecordingToasts::new();
        let errors = Arc::new(ConfigErrorBuffer::new());
        errors.record(ConfigLoadError::new("/a.json", "one"));

        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.0.0", "1.0.0")),
            toasts.clone(),
            RecordingCache::new(),
            errors.clone(),
        );

        hook.handle_event(&HostEvent::session_created()).await;

        // Only the startup toast; the accumulated errors stay queued.
        assert_eq!(toasts.shown().len(), 1);
        assert_eq!(errors.all().len(), 1);
    }

    #[tokio::test]
    async fn test_toast_failures_are_swallowed() {
        let toasts = RecordingToasts::failing();
        let errors = Arc::new(ConfigErrorBuffer::new());
        errors.record(ConfigLoadError::new("/a.json", "one"));

        let mut hook = notifier(
            FakeChecker::ok(UpdateCheckResult::published("1.0.0", "2.0.0")),
            toasts,
            RecordingCache::new(),
            errors.clone(),
        );

        // Must not panic or propagate, and the error store is still cleared.
        hook.handle_event(&HostEvent::session_created()).await;
        assert!(errors.all().is_empty());
    }
}
