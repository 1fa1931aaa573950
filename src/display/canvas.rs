//! SDL2 window backends

use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use super::{PixelBuffer, Renderer, Rgb};

#[inline]
fn sdl_color(color: Rgb) -> Color {
    Color::RGB(color.0, color.1, color.2)
}

/// Draws straight onto the window canvas
pub struct CanvasRenderer {
    canvas: Canvas<Window>,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas: Canvas<Window>) -> Self {
        let (width, height) = canvas.window().size();
        Self {
            canvas,
            width,
            height,
        }
    }
}

impl Renderer for CanvasRenderer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        self.canvas.set_draw_color(sdl_color(color));
        // Only fails on a lost renderer, which present() will report
        if let Err(e) = self.canvas.fill_rect(Rect::new(x, y, w, h)) {
            log::trace!("fill_rect failed: {}", e);
        }
    }

    fn present(&mut self) -> Result<(), String> {
        self.canvas.present();
        Ok(())
    }
}

/// Streaming texture the software frame is uploaded into
struct RenderTarget<'a> {
    texture: Texture<'a>,
}

impl<'a> RenderTarget<'a> {
    fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}

/// Rasterizes into a `PixelBuffer` on the CPU, then streams the buffer to
/// the window once per frame
pub struct SoftwareRenderer<'a> {
    canvas: Canvas<Window>,
    target: RenderTarget<'a>,
    buffer: PixelBuffer,
}

impl<'a> SoftwareRenderer<'a> {
    /// `texture_creator` must come from `canvas.texture_creator()`
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
    ) -> Result<Self, String> {
        let (width, height) = canvas.window().size();
        let target = RenderTarget::with_size(texture_creator, width, height)?;
        Ok(Self {
            canvas,
            target,
            buffer: PixelBuffer::with_size(width, height),
        })
    }
}

impl Renderer for SoftwareRenderer<'_> {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn clear(&mut self, color: Rgb) {
        self.buffer.clear(color.0, color.1, color.2);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        self.buffer.fill_rect(x, y, w, h, color.0, color.1, color.2);
    }

    fn present(&mut self) -> Result<(), String> {
        self.target
            .texture
            .update(None, self.buffer.as_bytes(), (self.buffer.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&self.target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
