//! Studio panel state
//!
//! Everything the panel shows or edits, kept apart from egui so it can be
//! driven directly in tests.

use sandbox_core::{Color, EditFields, EditTab, ObjectKey, ObjectKind, World};

use crate::i18n::{Language, Strings};

/// Requests from the panel that need the world or the filesystem
#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    DeleteSelected,
    SaveScene,
    LoadScene,
    CloseAlert,
}

/// Panel state
#[derive(Clone, Debug)]
pub struct StudioState {
    /// Studio ("edit") mode: panel open, crosshair shown, clicks spawn/select
    pub edit_mode: bool,
    pub language: Language,
    pub spawn_kind: ObjectKind,
    pub spawn_color: Color,
    pub tab: EditTab,
    pub scene_path: String,
    /// Last save/load result, shown under the file buttons
    pub status: Option<String>,

    edit: EditFields,
    edit_target: Option<ObjectKey>,
    alert: Option<String>,
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new(Language::default(), Color::DEFAULT_SPAWN, "scene.json")
    }
}

impl StudioState {
    pub fn new(language: Language, spawn_color: Color, scene_path: impl Into<String>) -> Self {
        Self {
            edit_mode: false,
            language,
            spawn_kind: ObjectKind::Cube,
            spawn_color,
            tab: EditTab::Move,
            scene_path: scene_path.into(),
            status: None,
            edit: EditFields::default(),
            edit_target: None,
            alert: None,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Flip edit mode, returning the new state
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    /// Reload the fields when the world's selection changed
    ///
    /// Fields are only read from the object when it becomes selected; after
    /// that the panel owns them.
    pub fn sync_selection(&mut self, world: &World) {
        let selected = world.selected();
        if selected == self.edit_target {
            return;
        }
        self.edit_target = selected;
        if let Some(fields) = selected.and_then(|key| world.edit_fields(key)) {
            self.edit = fields;
        }
    }

    /// Fields to push onto the selection this frame
    pub fn edit_fields(&self) -> Option<&EditFields> {
        self.edit_target.map(|_| &self.edit)
    }

    pub fn edit_fields_mut(&mut self) -> Option<&mut EditFields> {
        match self.edit_target {
            Some(_) => Some(&mut self.edit),
            None => None,
        }
    }

    pub fn edit_target(&self) -> Option<ObjectKey> {
        self.edit_target
    }

    /// Show a blocking message; replaces any message already shown
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn close_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}
