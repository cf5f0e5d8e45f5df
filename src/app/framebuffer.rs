//! CPU framebuffer: paints a `Scene` and uploads it to a texture.
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use crate::render::{Scene, Viewport};

const CEILING: Color = Color::new(68, 68, 68, 255);
const FLOOR: Color = Color::new(34, 34, 34, 255);
const ENEMY_BODY: Color = Color::new(170, 20, 20, 255);
const ENEMY_HEAD: Color = Color::new(210, 60, 50, 255);
const BAR_BACK: Color = Color::new(60, 0, 0, 255);
const BAR_FILL: Color = Color::new(40, 220, 60, 255);

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self { color_buffer: vec![Color::BLACK; size], width, height }
    }

    /// Fills `[x0, x1) × [y0, y1)`, clipped to the buffer first so huge
    /// near-camera sprites stay cheap.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let (w, h) = (self.width as f32, self.height as f32);
        let cx0 = x0.clamp(0.0, w) as u32;
        let cy0 = y0.clamp(0.0, h) as u32;
        let cx1 = x1.clamp(0.0, w) as u32;
        let cy1 = y1.clamp(0.0, h) as u32;
        if cx1 <= cx0 {
            return;
        }
        for y in cy0..cy1 {
            let row = (y * self.width) as usize;
            self.color_buffer[row + cx0 as usize..row + cx1 as usize].fill(color);
        }
    }

    pub fn paint_scene(&mut self, scene: &Scene, view: &Viewport) {
        let w = self.width as f32;
        let hh = self.height as f32 * 0.5;
        self.fill_rect(0.0, 0.0, w, hh, CEILING);
        self.fill_rect(0.0, hh, w, self.height as f32, FLOOR);

        for col in &scene.walls {
            let s = col.shade;
            let color = Color::new(s, s / 2, 0, 255);
            let x = col.column as f32;
            self.fill_rect(x, col.top, x + 1.0, col.top + col.screen_height, color);
        }

        // drawn in emission order; later sprites cover earlier ones
        for sp in &scene.sprites {
            let size = sp.sprite_size;
            let top = view.height as f32 * 0.5 - size * 0.5;
            let body_w = size * 0.5;
            let left = sp.screen_x - body_w * 0.5;
            self.fill_rect(left, top + size * 0.25, left + body_w, top + size, ENEMY_BODY);
            let head = size * 0.25;
            let hx = sp.screen_x - head * 0.5;
            self.fill_rect(hx, top, hx + head, top + head, ENEMY_HEAD);

            let bar_w = size * 0.6;
            let bx = sp.screen_x - bar_w * 0.5;
            let by = top - 8.0;
            self.fill_rect(bx, by, bx + bar_w, by + 4.0, BAR_BACK);
            self.fill_rect(bx, by, bx + bar_w * sp.health_fraction, by + 4.0, BAR_FILL);
        }
    }

    /// Copies the pixels into a persistent texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // Color is #[repr(C)] RGBA8, so the buffer is already the byte layout raylib wants
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}
