//! The App: root shell of the wallet.
//!
//! The App owns the auth gate, the single mounted screen and the timers of
//! that screen. Front-ends send [`Action`]s; screens answer with commands,
//! which the App carries out until nothing is left to do.

use std::collections::VecDeque;
use std::sync::Arc;

use nour_core::catalog::WALLET_DOCUMENT_COUNT;
use nour_core::{
    bottom_nav, Document, DocumentId, DocumentType, ExtractedFields, FileFingerprint, NavItem, Screen,
    VerificationStatus,
};
use nour_flows::{CaptureSource, Command, TimerKey, UploadEvent};
use nour_ports::{CameraCapture, FileSource, FixedFileSource, SimulatedValidator, Validator};
use nour_runtime::{EventBus, MountId, TimerScope};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::screens::{Action, MountedScreen};
use crate::shell::{AppState, NavOutcome};

/// Issuer recorded on documents saved from an upload.
pub const UPLOAD_ISSUER: &str = "Nour AI Verification";

/// Builder for an [`App`] with custom capabilities.
pub struct AppBuilder {
    config: AppConfig,
    validator: Option<Arc<dyn Validator>>,
    files: Option<Arc<dyn FileSource>>,
    camera: Option<Arc<dyn FileSource>>,
}

impl AppBuilder {
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Source behind "Choose File".
    pub fn file_source(mut self, files: impl FileSource + 'static) -> Self {
        self.files = Some(Arc::new(files));
        self
    }

    /// Source behind "Take Photo".
    pub fn camera(mut self, camera: impl FileSource + 'static) -> Self {
        self.camera = Some(Arc::new(camera));
        self
    }

    pub fn build(self) -> Result<App> {
        self.config.validate()?;
        let validator = match self.validator {
            Some(validator) => validator,
            None => Arc::new(SimulatedValidator::new(self.config.validation_success_rate)),
        };
        // Headless default: no device picker, so every pick is dismissed.
        let files = self.files.unwrap_or_else(|| Arc::new(FixedFileSource::cancelled()));
        let camera = self.camera.unwrap_or_else(|| Arc::new(CameraCapture::new()));
        Ok(App::assemble(self.config, validator, files, camera))
    }
}

/// The application shell.
pub struct App {
    config: AppConfig,
    state: AppState,
    mounted: MountedScreen,
    mount: MountId,
    /// Drops with the screen it belongs to.
    timers: TimerScope<TimerKey>,
    bus: EventBus<TimerKey>,
    validator: Arc<dyn Validator>,
    files: Arc<dyn FileSource>,
    camera: Arc<dyn FileSource>,
    /// Documents saved from uploads during this session.
    documents: Vec<Document>,
}

impl App {
    /// An app with the simulated validator and the mock camera.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: AppConfig) -> AppBuilder {
        AppBuilder {
            config,
            validator: None,
            files: None,
            camera: None,
        }
    }

    fn assemble(
        config: AppConfig,
        validator: Arc<dyn Validator>,
        files: Arc<dyn FileSource>,
        camera: Arc<dyn FileSource>,
    ) -> Self {
        let state = AppState::new(config.initial_screen);
        if state.screen() != config.initial_screen {
            debug!(requested = %config.initial_screen, "initial screen requires sign-in, showing signup");
        }
        let bus = EventBus::default();
        let mount = MountId(0);
        let timers = TimerScope::new(mount, bus.sender());
        let mounted = MountedScreen::mount(state.screen(), &config, &[]);
        Self {
            config,
            state,
            mounted,
            mount,
            timers,
            bus,
            validator,
            files,
            camera,
            documents: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn mounted(&self) -> &MountedScreen {
        &self.mounted
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Bottom navigation for the current screen, if it shows one.
    pub fn bottom_nav(&self) -> Option<Vec<NavItem>> {
        if !self.state.is_authenticated() {
            return None;
        }
        bottom_nav(self.state.screen())
    }

    /// Documents saved to the wallet during this session.
    pub fn session_documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle one user action and every effect it leads to.
    ///
    /// Timers the action schedules are not awaited; see
    /// [`next_timer`](Self::next_timer).
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Navigate(target) => {
                self.navigate(target).await?;
            }
            Action::Tab(tab) => {
                self.navigate(tab.target()).await?;
            }
            action => {
                let requested = action.screen().unwrap_or(self.mounted.screen());
                let commands = self.mounted.apply(action).ok_or(AppError::ScreenNotMounted {
                    requested,
                    mounted: self.mounted.screen(),
                })?;
                self.execute(commands).await?;
            }
        }
        Ok(())
    }

    /// Ask the auth gate for `target` and mount it if allowed.
    pub async fn navigate(&mut self, target: Screen) -> Result<NavOutcome> {
        let outcome = self.state.navigate(target);
        if outcome == NavOutcome::Applied {
            let started = self.remount();
            self.execute(started).await?;
        }
        Ok(outcome)
    }

    /// Navigate by screen tag, as a front-end router would.
    pub async fn navigate_to(&mut self, tag: &str) -> Result<NavOutcome> {
        let target: Screen = tag.parse()?;
        self.navigate(target).await
    }

    /// End the session and show sign-in.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.state.sign_out();
        let started = self.remount();
        self.execute(started).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────────────────────

    /// Wait for the next timer of the mounted screen and deliver it.
    ///
    /// Returns `None` without waiting when the screen has no timer pending.
    pub async fn next_timer(&mut self) -> Result<Option<TimerKey>> {
        loop {
            let envelope = match self.bus.try_recv() {
                Some(envelope) => envelope,
                None if self.timers.pending() == 0 => return Ok(None),
                None => self.bus.recv().await?,
            };
            if envelope.mount != self.mount {
                debug!(stale = %envelope.mount, current = %self.mount, key = ?envelope.key, "stale timer dropped");
                continue;
            }
            match self.mounted.timer_action(envelope.key) {
                Some(action) => {
                    self.dispatch(action).await?;
                    return Ok(Some(envelope.key));
                }
                None => {
                    debug!(key = ?envelope.key, screen = %self.mounted.screen(), "timer has no handler");
                }
            }
        }
    }

    /// Deliver timers until the mounted screen has none left. Returns how
    /// many were delivered.
    pub async fn run_until_idle(&mut self) -> Result<usize> {
        let mut delivered = 0;
        while self.next_timer().await?.is_some() {
            delivered += 1;
        }
        Ok(delivered)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the mounted screen with a fresh one for the current screen.
    ///
    /// The old timer scope is dropped, which aborts its timers.
    fn remount(&mut self) -> Vec<Command> {
        self.mount = self.mount.next();
        self.timers = TimerScope::new(self.mount, self.bus.sender());
        self.mounted = MountedScreen::mount(self.state.screen(), &self.config, &self.documents);
        debug!(screen = %self.state.screen(), mount = %self.mount, "screen mounted");
        self.mounted.start()
    }

    async fn execute(&mut self, commands: Vec<Command>) -> Result<()> {
        // Commands are tied to the mount that produced them.
        let mut queue: VecDeque<(MountId, Command)> = commands.into_iter().map(|c| (self.mount, c)).collect();

        while let Some((mount, command)) = queue.pop_front() {
            if mount != self.mount {
                debug!(?command, "command of an unmounted screen dropped");
                continue;
            }
            let follow_up = match command {
                Command::Navigate(target) => {
                    if self.state.navigate(target) == NavOutcome::Applied {
                        self.remount()
                    } else {
                        Vec::new()
                    }
                }
                Command::Authenticate => {
                    self.state.authenticate();
                    self.remount()
                }
                Command::Schedule { key, after } => {
                    self.timers.schedule(key, after)?;
                    Vec::new()
                }
                Command::SelectFile(source) => {
                    let port = match source {
                        CaptureSource::Picker => &self.files,
                        CaptureSource::Camera => &self.camera,
                    };
                    let event = match port.select_file().await? {
                        Some(file) => UploadEvent::FileSelected(file),
                        None => UploadEvent::SelectionCancelled,
                    };
                    self.apply_upload(event)
                }
                Command::Validate { kind, file } => {
                    let outcome = self.validator.validate(kind, &file).await;
                    self.apply_upload(UploadEvent::ValidationFinished(outcome))
                }
                Command::SaveDocument { kind, fields, source } => {
                    self.save_document(kind, &fields, source);
                    Vec::new()
                }
            };
            queue.extend(follow_up.into_iter().map(|c| (self.mount, c)));
        }
        Ok(())
    }

    fn apply_upload(&mut self, event: UploadEvent) -> Vec<Command> {
        self.mounted.apply(Action::Upload(event)).unwrap_or_default()
    }

    fn save_document(&mut self, kind: DocumentType, fields: &ExtractedFields, source: FileFingerprint) {
        let id = DocumentId(WALLET_DOCUMENT_COUNT + self.documents.len() as u32 + 1);
        info!(%id, kind = %kind, fingerprint = %source, "document saved to wallet");
        self.documents.push(Document {
            id,
            name: kind.label().to_string(),
            category: kind.wallet_category().to_string(),
            status: VerificationStatus::Verified,
            issuer: UPLOAD_ISSUER.to_string(),
            expiry: Some(fields.expiry_date.clone()),
            icon: kind.icon().to_string(),
            source: Some(source),
        });
    }
}
