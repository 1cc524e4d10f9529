//! Browser implementations of the platform collaborators

use glam::Vec2;
use web_sys::{Document, HtmlCanvasElement, MouseEvent, Storage, TouchEvent};

use super::{ScoreDisplay, StorageError, TextStore, canvas_local};
use crate::sim::PointerInput;

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

/// One key in LocalStorage
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl TextStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(self.key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Writes scores into the `#currentScore` and `#bestScore` elements
pub struct DomScoreDisplay {
    document: Document,
}

impl DomScoreDisplay {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn show(&mut self, current: u32, best: u32) {
        if let Some(el) = self.document.get_element_by_id("currentScore") {
            el.set_text_content(Some(&current.to_string()));
        }
        if let Some(el) = self.document.get_element_by_id("bestScore") {
            el.set_text_content(Some(&best.to_string()));
        }
    }
}

fn canvas_origin(canvas: &HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// Canvas-local position of a mouse event
pub fn mouse_position(event: &MouseEvent, canvas: &HtmlCanvasElement) -> PointerInput {
    let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
    let pos = canvas_local(client, canvas_origin(canvas));
    PointerInput::mouse(pos.x, pos.y)
}

/// Canvas-local position of the first touch point.
///
/// `touchend` has no active touches, so fall back to the changed ones.
pub fn touch_position(event: &TouchEvent, canvas: &HtmlCanvasElement) -> Option<PointerInput> {
    let touch = event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))?;
    let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
    let pos = canvas_local(client, canvas_origin(canvas));
    Some(PointerInput::touch(pos.x, pos.y))
}
