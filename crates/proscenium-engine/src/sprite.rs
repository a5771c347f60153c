//! Sprites: a stage position plus a list of costumes.

use crate::coords::stage::draw_origin;
use crate::coords::{Rect, Vec2};
use crate::core::Actor;
use crate::costume::Costume;
use crate::error::RenderError;
use crate::surface::Surface;

/// A positioned set of costumes, one of which is active.
///
/// `x`/`y` are stage coordinates: a displacement from the stage center with
/// +Y up. They are public so game logic can move the sprite between ticks.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    costumes: Vec<Costume>,
    active_costume: usize,
}

impl Sprite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn with_costume(mut self, costume: Costume) -> Self {
        self.costumes.push(costume);
        self
    }

    pub fn add_costume(&mut self, costume: Costume) {
        self.costumes.push(costume);
    }

    #[inline]
    pub fn costumes(&self) -> &[Costume] {
        &self.costumes
    }

    #[inline]
    pub fn active_costume_index(&self) -> usize {
        self.active_costume
    }

    /// Selects the costume at `index`.
    pub fn set_active_costume(&mut self, index: usize) -> Result<(), RenderError> {
        if index >= self.costumes.len() {
            return Err(RenderError::CostumeOutOfRange { index, len: self.costumes.len() });
        }
        self.active_costume = index;
        Ok(())
    }

    /// Advances to the next costume, wrapping at the end. No-op without costumes.
    pub fn next_costume(&mut self) {
        if !self.costumes.is_empty() {
            self.active_costume = (self.active_costume + 1) % self.costumes.len();
        }
    }

    /// The costume that [`render`](Self::render) would draw.
    pub fn active_costume(&self) -> Result<&Costume, RenderError> {
        if self.costumes.is_empty() {
            return Err(RenderError::NoCostumes);
        }
        self.costumes.get(self.active_costume).ok_or(RenderError::CostumeOutOfRange {
            index: self.active_costume,
            len: self.costumes.len(),
        })
    }

    /// Surface-space top-left corner of the active costume.
    pub fn draw_position(&self) -> Result<Vec2, RenderError> {
        let costume = self.active_costume()?;
        Ok(draw_origin(Vec2::new(self.x, self.y), costume.x_offset()))
    }

    /// Draws the active costume at its native size.
    ///
    /// Draws nothing while the costume image is still loading.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let origin = self.draw_position()?;
        let Some(image) = self.active_costume()?.image().get() else {
            log::trace!("costume {} not loaded, skipping draw", self.active_costume);
            return Ok(());
        };

        let size = Vec2::new(image.width() as f32, image.height() as f32);
        surface.draw_image(image, Rect::from_origin_size(origin, size));
        Ok(())
    }
}

impl Actor for Sprite {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        Sprite::render(self, surface)
    }
}
