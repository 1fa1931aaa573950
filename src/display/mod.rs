mod canvas;
mod font;
mod pixel_buffer;

pub use canvas::{CanvasRenderer, SoftwareRenderer};
pub use font::{draw_text, text_width};
pub use pixel_buffer::PixelBuffer;

use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::settings::Backend;

pub const WINDOW_TITLE: &str = "Brick Breaker";

/// 8-bit RGB color
pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const WHITE: Rgb = (255, 255, 255);
pub const RED: Rgb = (255, 0, 0);
pub const YELLOW: Rgb = (255, 255, 0);

/// Immediate-mode drawing surface the frame loop talks to.
///
/// Every backend only has to provide rectangles; text falls back to the
/// built-in bitmap font drawn through `fill_rect`.
pub trait Renderer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb);

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgb) {
        draw_text(self, x, y, text, scale, color);
    }

    /// Show the finished frame
    fn present(&mut self) -> Result<(), String>;
}

/// Open the game window and its event pump.
///
/// The canvas is built accelerated or software according to `backend`.
/// vsync=true additionally locks presentation to the monitor refresh.
pub fn open(
    title: &str,
    width: u32,
    height: u32,
    backend: Backend,
    vsync: bool,
) -> Result<(Canvas<Window>, EventPump), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas_builder = window.into_canvas();
    canvas_builder = match backend {
        Backend::Accelerated => canvas_builder.accelerated(),
        Backend::Software => canvas_builder.software(),
    };
    if vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

    let event_pump = sdl_context.event_pump()?;

    Ok((canvas, event_pump))
}
