//! Window, input and audio around the ray-casting core.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer that paints a `Scene`
//! - `process_events`: keyboard/mouse to `FrameInput`
//! - `audio_manager`: gunshot sound effects

pub mod audio_manager;
pub mod framebuffer;
pub mod process_events;

use std::time::Duration;

use raylib::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ConfigError, GameConfig};
use crate::core::world::World;
use crate::render::Scene;
use audio_manager::AudioManager;
use framebuffer::Framebuffer;
use process_events::process_events;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window setup failed: {0}")]
    Window(String),
}

/// Gun overlay and crosshair, drawn straight to the screen on top of the
/// framebuffer. The gun kicks down while the weapon cools down.
fn draw_hud(d: &mut impl RaylibDraw, world: &World, w: i32, h: i32, fps: u32) {
    let cx = w / 2;
    let cy = h / 2;
    d.draw_rectangle(cx - 1, cy - 8, 2, 16, Color::WHITE);
    d.draw_rectangle(cx - 8, cy - 1, 16, 2, Color::WHITE);

    let total = world.combat.cooldown.as_secs_f32();
    let kick = if total > 0.0 {
        world.weapon.cooldown_remaining().as_secs_f32() / total
    } else {
        0.0
    };
    let gun_w = w / 8;
    let gun_h = h / 4;
    let gy = h - gun_h + (kick * 24.0) as i32;
    d.draw_rectangle(cx - gun_w / 2, gy, gun_w, gun_h, Color::new(70, 70, 78, 255));
    d.draw_rectangle(cx - gun_w / 6, gy - gun_h / 3, gun_w / 3, gun_h / 3, Color::new(40, 40, 46, 255));
    if kick > 0.7 {
        d.draw_circle(cx, gy - gun_h / 3, (gun_w / 4) as f32, Color::new(255, 200, 60, 220));
    }

    d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::WHITE);
    d.draw_text(&format!("Enemies: {}", world.enemies.len()), 10, 34, 20, Color::WHITE);
    if world.cleared() {
        d.draw_text("CLEAR", cx - 40, cy - 60, 30, Color::GREEN);
    }
}

pub fn run(cfg: &GameConfig) -> Result<(), AppError> {
    let mut world = cfg.build_world()?;
    let view = cfg.viewport();
    let (w, h) = (cfg.window.width, cfg.window.height);

    let (mut window, raylib_thread) = raylib::init()
        .size(w as i32, h as i32)
        .title(&cfg.window.title)
        .build();
    window.set_target_fps(cfg.window.target_fps);
    window.disable_cursor();
    info!(width = w, height = h, fov = view.fov, "window open");

    let blank = Image::gen_image_color(w as i32, h as i32, Color::BLACK);
    let mut screen = window
        .load_texture_from_image(&raylib_thread, &blank)
        .map_err(|e| AppError::Window(e.to_string()))?;
    let mut framebuffer = Framebuffer::new(w, h);

    let audio = AudioManager::new().map(|mut a| {
        a.load_sfx_auto();
        a
    });
    if audio.is_none() {
        warn!("no audio output device, running silent");
    }

    let mut scene = Scene::default();
    while !window.window_should_close() {
        // long stalls (window drag, breakpoints) are capped to one short step
        let dt = Duration::try_from_secs_f32(window.get_frame_time().min(0.1)).unwrap_or_default();
        let input = process_events(&window, cfg.movement.mouse_sensitivity);

        // shot first, then the render pass sees the updated enemy set
        if let Some(outcome) = world.step(&input, dt) {
            if let Some(a) = &audio {
                a.on_shot(outcome);
            }
        }
        world.render_into(&mut scene, &view);
        framebuffer.paint_scene(&scene, &view);
        framebuffer.upload_to_texture(&mut screen);

        let fps_now = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&screen, 0, 0, Color::WHITE);
        draw_hud(&mut d, &world, w as i32, h as i32, fps_now);
    }

    info!(enemies_left = world.enemies.len(), "window closed");
    Ok(())
}
