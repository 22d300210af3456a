use carousel::constants::*;
use raylib::prelude::*;

pub struct Slide {
    image: Texture2D,
    scale: f32,
    pub active: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        // Shrink images that would overflow the screen along their long side
        let scale = if image.width() > image.height() {
            if image.width() as f32 > RENDER_WIDTH as f32 * SLIDE_FIT {
                (RENDER_WIDTH as f32 * SLIDE_FIT) / image.width() as f32
            } else {
                1.0
            }
        } else if image.height() as f32 > RENDER_HEIGHT as f32 * SLIDE_FIT {
            (RENDER_HEIGHT as f32 * SLIDE_FIT) / image.height() as f32
        } else {
            1.0
        };

        Self {
            image,
            scale,
            active: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.active {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (RENDER_WIDTH as f32 - scaled_width) * 0.5,
                (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
