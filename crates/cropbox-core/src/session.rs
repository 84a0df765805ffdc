//! One cropping session: the source image, its viewport transform and the
//! selection editor, driven by a stream of [`InputEvent`]s.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::{CropboxError, Result};
use crate::geometry::Point;
use crate::input::{Action, InputEvent, Outcome, PointerButton};
use crate::io::crop::{save_crop, OriginalCoords};
use crate::io::image_io::{image_size, load_image};
use crate::overlay::Overlay;
use crate::selection::SelectionEditor;
use crate::settings::Settings;
use crate::viewport::{ViewportTransform, ZoomDirection};

pub struct CropSession {
    image: Arc<DynamicImage>,
    transform: ViewportTransform,
    editor: SelectionEditor,
}

impl CropSession {
    pub fn new(image: DynamicImage, settings: &Settings) -> Result<Self> {
        let transform = ViewportTransform::fit(image_size(&image), &settings.viewport)?;
        info!(
            width = image.width(),
            height = image.height(),
            scale = transform.scale(),
            "Cropping session started"
        );

        Ok(Self {
            image: Arc::new(image),
            transform,
            editor: SelectionEditor::new(&settings.selection),
        })
    }

    pub fn open(path: &Path, settings: &Settings) -> Result<Self> {
        Self::new(load_image(path)?, settings)
    }

    /// The original, unscaled source image.
    pub fn source(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.image)
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn editor(&self) -> &SelectionEditor {
        &self.editor
    }

    pub fn overlay(&self) -> Overlay {
        Overlay::build(&self.transform, &self.editor)
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Press { button: PointerButton::Primary, pos } => {
                let p = self.transform.display_to_image(pos);
                self.editor.press(p, self.transform.scaled_size()).into()
            }
            InputEvent::Press { button: PointerButton::Secondary, pos } => {
                self.transform.begin_pan(pos);
                Outcome::Unchanged
            }
            InputEvent::Move { pos } => {
                let mut changed = false;
                if self.editor.drag().is_some() {
                    let p = self.transform.display_to_image(pos);
                    changed |= self.editor.drag_to(p, self.transform.scaled_size());
                }
                if self.transform.is_panning() {
                    changed |= self.transform.pan_to(pos);
                }
                changed.into()
            }
            InputEvent::Release { button: PointerButton::Primary, .. } => {
                self.editor.release();
                Outcome::Unchanged
            }
            InputEvent::Release { button: PointerButton::Secondary, .. } => {
                self.transform.end_pan();
                Outcome::Unchanged
            }
            InputEvent::DoubleClick { button: PointerButton::Primary, pos } => {
                let p = self.transform.display_to_image(pos);
                self.editor.double_click(p).into()
            }
            InputEvent::DoubleClick { button: PointerButton::Secondary, .. } => Outcome::Unchanged,
            InputEvent::Wheel { delta, pos } => self.zoom(delta, pos),
            InputEvent::Button(action) => self.action(action),
        }
    }

    fn zoom(&mut self, delta: f64, pos: Point) -> Outcome {
        if delta == 0.0 {
            return Outcome::Unchanged;
        }
        match self.transform.zoom_step(ZoomDirection::from_wheel_delta(delta), pos) {
            Some(ratio) => {
                self.editor.rescale(ratio, self.transform.scaled_size());
                Outcome::Redraw
            }
            None => Outcome::Unchanged,
        }
    }

    fn action(&mut self, action: Action) -> Outcome {
        match action {
            Action::SaveSelection => match self.coordinates() {
                Ok(coords) => Outcome::Save(coords),
                Err(_) => Outcome::EmptySelection(action),
            },
            Action::CopyCoordinates => match self.coordinates() {
                Ok(coords) => Outcome::Copy(coords.to_string()),
                Err(_) => Outcome::EmptySelection(action),
            },
            Action::CancelSelection => self.editor.cancel().into(),
        }
    }

    /// Current selection in original-image pixels.
    pub fn coordinates(&self) -> Result<OriginalCoords> {
        self.editor
            .rect()
            .map(|r| OriginalCoords::from_selection(&r, self.transform.scale()))
            .ok_or(CropboxError::NoSelection)
    }

    /// Text for the read-only coordinate field; empty without a selection.
    pub fn coordinate_text(&self) -> String {
        self.coordinates()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    /// Crop the original image to the current selection and write it to `path`.
    pub fn export_crop(&self, path: &Path) -> Result<PathBuf> {
        let coords = self.coordinates()?;
        debug!(%coords, path = %path.display(), "Exporting selection");
        save_crop(&self.image, &coords, path)
    }
}
