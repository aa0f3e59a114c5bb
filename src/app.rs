//! Application state and core logic

use crate::config::CardConfig;
use crate::export::{ArtifactKind, CardExporter};
use crate::share::{copy_share_link, decode_link, parse_link, ClipboardSink, CopyLinkError};
use crate::state::{
    normalize_input_path, ActionButton, AppState, CardDraft, DraftStore, FieldBinding, Form,
    FormField, ImageSlot, TextField,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

/// Main application struct
pub struct App {
    /// UI state: form buffers, focus and notifications
    pub state: AppState,
    /// Owner of the card draft
    store: DraftStore,
    /// Latest draft broadcast by the store, read by the preview
    preview: watch::Receiver<CardDraft>,
    exporter: CardExporter,
    clipboard: Box<dyn ClipboardSink>,
    base_url: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, optionally seeded from a share link
    pub fn new(
        config: &CardConfig,
        link: Option<&str>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (tx, preview) = watch::channel(CardDraft::default());
        let mut store = DraftStore::new();
        store.set_listener(Box::new(move |draft| {
            tx.send_replace(draft.clone());
        }));

        let exporter = CardExporter::new(
            config.resolved_output_dir(),
            config.resolved_capture_scale(),
            config.resolved_footer(),
        );

        let mut app = Self {
            state: AppState::default(),
            store,
            preview,
            exporter,
            clipboard,
            base_url: config.resolved_base_url(),
            quit: false,
        };

        if let Some(link) = link {
            app.hydrate(link);
        }
        app
    }

    fn hydrate(&mut self, link: &str) {
        let url = match parse_link(link) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(link, error = %err, "ignoring unparseable share link");
                self.state
                    .notifications
                    .destructive("Invalid link", "The share link could not be read");
                return;
            }
        };

        if let Some(fields) = decode_link(&url) {
            if self.store.hydrate_from_link(fields) {
                tracing::info!("draft hydrated from share link");
                self.state.form.sync_text_from(self.store.draft());
            }
        }
    }

    /// Snapshot of the draft as last broadcast
    pub fn preview(&self) -> watch::Ref<'_, CardDraft> {
        self.preview.borrow()
    }

    /// Downloads and link copying need a name and a phone number
    pub fn actions_enabled(&self) -> bool {
        self.store.draft().has_required_fields()
    }

    pub fn output_dir(&self) -> &std::path::Path {
        self.exporter.output_dir()
    }

    /// Credit line printed under the card
    pub fn footer(&self) -> &str {
        self.exporter.footer()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Called once per event loop tick
    pub fn tick(&mut self) {
        self.state.notifications.prune();
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons_row = self.state.form.is_buttons_row_active();
        let has_command_modifier = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.export_card(ArtifactKind::Png).await;
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.export_card(ArtifactKind::Pdf).await;
            }
            KeyCode::Char('l') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_link();
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::F(1) => self.state.toggle_instructions(),
            KeyCode::Esc => {
                if !self.state.notifications.is_empty() {
                    self.state.notifications.dismiss_all();
                } else if self.state.shows_instructions() {
                    self.state.toggle_instructions();
                }
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Down if !self.state.form.is_active_field_multiline() => {
                self.state.next_form_field()
            }
            KeyCode::Up if !self.state.form.is_active_field_multiline() => {
                self.state.prev_form_field()
            }
            // Left/Right for the buttons row
            KeyCode::Left if on_buttons_row => self.state.form.prev_button(),
            KeyCode::Right if on_buttons_row => self.state.form.next_button(),
            KeyCode::Enter if on_buttons_row => {
                let action = self.state.form.selected_action();
                self.trigger(action).await;
            }
            KeyCode::Enter => self.handle_field_enter(),
            KeyCode::Delete => self.clear_active_image(),
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons_row && !has_command_modifier => {
                self.edit_active_field(|field| field.push_char(c));
            }
            KeyCode::Backspace if !on_buttons_row => {
                self.edit_active_field(|field| {
                    field.pop_char();
                });
            }
            _ => {}
        }
        Ok(())
    }

    async fn trigger(&mut self, action: ActionButton) {
        match action {
            ActionButton::DownloadImage => self.export_card(ArtifactKind::Png).await,
            ActionButton::DownloadPdf => self.export_card(ArtifactKind::Pdf).await,
            ActionButton::CopyLink => self.copy_link(),
        }
    }

    /// Apply an edit to the active field's buffer and push text edits into the store
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut FormField)) {
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };
        edit(field);
        if let Some(text_field) = field.text_field() {
            let value = field.value.clone();
            self.store.set_text(text_field, value);
        }
    }

    fn handle_field_enter(&mut self) {
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };
        let binding = field.binding;
        let input = field.value.clone();
        match binding {
            FieldBinding::Image(slot) => self.upload(slot, &input),
            FieldBinding::Text(TextField::Message) => {
                self.edit_active_field(|field| field.push_char('\n'));
            }
            FieldBinding::Text(_) => self.state.next_form_field(),
        }
    }

    fn upload(&mut self, slot: ImageSlot, input: &str) {
        if input.trim().is_empty() {
            self.state.notifications.destructive(
                "No file selected",
                "Type or paste the path to an image, then press Enter",
            );
            return;
        }

        let path = normalize_input_path(input);
        match self.store.upload_image(slot, &path) {
            Ok(()) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.clear();
                }
            }
            Err(err) => {
                tracing::warn!(slot = ?slot, error = %err, "image upload rejected");
                self.state
                    .notifications
                    .destructive(err.title(), err.description());
            }
        }
    }

    fn clear_active_image(&mut self) {
        let active = self.state.form.active_field_index;
        let slot = self
            .state
            .form
            .get_field(active)
            .and_then(|field| field.image_slot());
        if let Some(slot) = slot {
            if self.store.clear_image(slot) {
                tracing::info!(slot = ?slot, "image cleared");
            }
        }
    }

    /// Render the current draft to a file in the output directory
    pub async fn export_card(&mut self, kind: ArtifactKind) {
        if !self.actions_enabled() {
            return;
        }

        let draft = self.store.draft().clone();
        match self.exporter.export_async(draft, kind).await {
            Ok(_) => self
                .state
                .notifications
                .success("Success!", kind.success_message()),
            Err(err) => {
                tracing::error!(error = %err, kind = kind.extension(), "failed to export card");
                self.state
                    .notifications
                    .destructive("Error", "Failed to download the card. Please try again.");
            }
        }
    }

    /// Put the share link on the clipboard
    pub fn copy_link(&mut self) {
        match copy_share_link(self.store.draft(), &self.base_url, self.clipboard.as_mut()) {
            Ok(_) => self
                .state
                .notifications
                .success("Link copied!", "Share this link with your friends and family"),
            Err(CopyLinkError::Link(crate::error::LinkError::MissingRequiredFields)) => {
                self.state.notifications.destructive(
                    "Missing information",
                    "Please fill in your name and phone number first",
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to copy share link");
                self.state.notifications.destructive(
                    "Failed to copy",
                    "Please try again or copy the URL manually",
                );
            }
        }
    }
}
