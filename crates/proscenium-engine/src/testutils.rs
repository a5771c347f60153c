use std::cell::RefCell;
use std::rc::Rc;

use image::RgbaImage;

use crate::coords::Rect;
use crate::core::{Actor, TickCtx};
use crate::error::RenderError;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Clear { rect: Rect },
    Draw { dest: Rect },
    Update(&'static str),
    Render(&'static str),
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

/// Surface that records calls instead of drawing.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    journal: Journal,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_journal(width, height, Journal::default())
    }

    pub fn with_journal(width: u32, height: u32, journal: Journal) -> Self {
        Self { width, height, journal }
    }

    pub fn events(&self) -> Vec<Event> {
        self.journal.borrow().clone()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.journal.borrow_mut().push(Event::Clear { rect });
    }

    fn draw_image(&mut self, _image: &RgbaImage, dest: Rect) {
        self.journal.borrow_mut().push(Event::Draw { dest });
    }
}

/// Actor that logs its update/render calls into a shared journal.
pub struct Tracer {
    pub name: &'static str,
    pub journal: Journal,
    /// Calls `request_stop` on this update pass index.
    pub stop_on_tick: Option<u64>,
    pub fail_render: bool,
}

impl Tracer {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self { name, journal: journal.clone(), stop_on_tick: None, fail_render: false }
    }
}

impl Actor for Tracer {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        self.journal.borrow_mut().push(Event::Update(self.name));
        if self.stop_on_tick == Some(ctx.tick) {
            ctx.request_stop();
        }
    }

    fn render(&self, _surface: &mut dyn Surface) -> Result<(), RenderError> {
        if self.fail_render {
            return Err(RenderError::NoCostumes);
        }
        self.journal.borrow_mut().push(Event::Render(self.name));
        Ok(())
    }
}
