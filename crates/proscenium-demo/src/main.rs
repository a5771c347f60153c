//! Headless demo: a bouncing two-frame sprite on a software canvas.
//!
//! Usage: `proscenium-demo [output.png]`

use std::time::Duration;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use proscenium_engine::coords::stage::STAGE_WIDTH;
use proscenium_engine::logging::{init_logging, LoggingConfig};
use proscenium_engine::prelude::*;

const SURFACE_ID: &str = "stage";
const FRAME_EVERY: u64 = 10;
const MAX_BOUNCES: i64 = 4;

/// Sprite that walks back and forth across the stage, swapping costumes as it goes.
struct Bouncer {
    sprite: Sprite,
    speed: f32,
}

impl Actor for Bouncer {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        self.sprite.x += self.speed;

        let limit = STAGE_WIDTH / 2.0 - 16.0;
        if self.sprite.x.abs() > limit {
            self.sprite.x = self.sprite.x.clamp(-limit, limit);
            self.speed = -self.speed;

            let bounces = ctx.data.get_int("bounces").unwrap_or(0) + 1;
            ctx.data.set_int("bounces", bounces);
            log::info!("bounce {bounces} at tick {}", ctx.tick);
            if bounces >= MAX_BOUNCES {
                ctx.request_stop();
            }
        }

        if ctx.tick % FRAME_EVERY == 0 {
            self.sprite.next_costume();
        }
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.sprite.render(surface)
    }
}

fn square(size: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba(color))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let output = std::env::args().nth(1).unwrap_or_else(|| "proscenium-demo.png".to_string());

    let mut document = Document::new();
    document.insert(SURFACE_ID, Canvas::stage());

    let mut game = Game::new(&mut document, SURFACE_ID, GameConfig::default())
        .context("failed to create game")?;
    game.add_audio_asset("bounce", "bounce.wav");

    // Costume images are 32px wide; an x offset of 32 centers them on the stage.
    let bouncer = Bouncer {
        sprite: Sprite::at(0.0, 0.0)
            .with_costume(Costume::new(square(32, [230, 80, 40, 255])).with_x_offset(32.0))
            .with_costume(Costume::new(square(32, [40, 120, 230, 255])).with_x_offset(32.0)),
        speed: 6.0,
    };
    game.add(bouncer);
    game.add(Sprite::at(-200.0, 150.0).with_costume(Costume::new(square(12, [250, 220, 60, 255]))));

    game.start().context("failed to start game")?;
    if game.state() == GameState::WaitingForUserGesture {
        game.user_gesture()?;
    }

    let summary = Runtime::run(
        &mut game,
        RuntimeConfig { max_duration: Some(Duration::from_secs(10)), ..Default::default() },
    )?;

    log::info!(
        "ran {} ticks in {:.2?}, {} bounce(s); bounce sound at {:?}",
        summary.ticks,
        summary.elapsed,
        game.data().get_int("bounces").unwrap_or(0),
        game.audio().get("bounce"),
    );

    game.surface().save(&output)?;
    log::info!("final frame written to {output}");
    Ok(())
}
