use std::cell::RefCell;
use std::rc::Rc;

use crate::error::RenderError;
use crate::surface::Surface;

use super::ctx::TickCtx;

/// Anything a [`Game`](crate::game::Game) can update and render each tick.
///
/// # Implementing a custom actor
///
/// ```rust,ignore
/// struct Walker { sprite: Sprite }
///
/// impl Actor for Walker {
///     fn update(&mut self, _ctx: &mut TickCtx<'_>) {
///         self.sprite.x += 2.0;
///         self.sprite.next_costume();
///     }
///     fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
///         self.sprite.render(surface)
///     }
/// }
/// ```
pub trait Actor {
    /// Per-tick game logic. Does nothing by default.
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        let _ = ctx;
    }

    /// Draws the actor onto `surface`.
    fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError>;
}

impl<A: Actor + ?Sized> Actor for Box<A> {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        (**self).update(ctx)
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        (**self).render(surface)
    }
}

/// Lets the host keep a handle to an actor and mutate it between ticks.
impl<A: Actor + ?Sized> Actor for Rc<RefCell<A>> {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        self.borrow_mut().update(ctx)
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.borrow().render(surface)
    }
}
