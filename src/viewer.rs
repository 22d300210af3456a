use carousel::constants::*;
use carousel::{RenderTarget, Theme};
use raylib::prelude::*;

use crate::slide::Slide;

/// What a click in render space landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
}

struct Dot {
    center: Vector2,
    active: bool,
}

/// Slides plus their indicator dots, as seen by the carousel.
pub struct SlideDeck {
    slides: Vec<Slide>,
    dots: Vec<Dot>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        let dots = dot_centers(slides.len())
            .into_iter()
            .map(|center| Dot { center, active: false })
            .collect();
        Self { slides, dots }
    }

    pub fn hit(&self, point: Vector2) -> Option<Hit> {
        let centers: Vec<Vector2> = self.dots.iter().map(|dot| dot.center).collect();
        hit_test(point, &centers)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, theme: Theme) {
        let (background, foreground) = palette(theme);
        d.clear_background(background);

        for slide in self.slides.iter() {
            slide.draw(d);
        }

        if self.slides.len() > 1 {
            let arrow_size = 96;
            let y = RENDER_HEIGHT / 2 - arrow_size / 2;
            d.draw_text("<", 40, y, arrow_size, foreground);
            d.draw_text(">", RENDER_WIDTH - 40 - arrow_size / 2, y, arrow_size, foreground);

            for dot in self.dots.iter() {
                let color = if dot.active { foreground } else { Color::GRAY };
                d.draw_circle_v(dot.center, DOT_RADIUS, color);
            }
        }

        let label = theme.toggle_label();
        let font_size = 24;
        let width = measure_text(label, font_size);
        d.draw_text(label, RENDER_WIDTH - width - 24, 24, font_size, foreground);
    }
}

impl RenderTarget for SlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn deactivate_all(&mut self) {
        for slide in self.slides.iter_mut() {
            slide.active = false;
        }
        for dot in self.dots.iter_mut() {
            dot.active = false;
        }
    }

    fn activate(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = true;
        }
        if let Some(dot) = self.dots.get_mut(index) {
            dot.active = true;
        }
    }
}

fn palette(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Dark => (Color::new(18, 18, 18, 255), Color::RAYWHITE),
        Theme::Light => (Color::new(240, 240, 240, 255), Color::new(24, 24, 24, 255)),
    }
}

/// Dot row centered horizontally along the bottom edge.
fn dot_centers(count: usize) -> Vec<Vector2> {
    let row_width = DOT_SPACING * count.saturating_sub(1) as f32;
    let left = (RENDER_WIDTH as f32 - row_width) * 0.5;
    let y = RENDER_HEIGHT as f32 - DOT_MARGIN;
    (0..count)
        .map(|i| Vector2::new(left + DOT_SPACING * i as f32, y))
        .collect()
}

/// Dots win over arrow zones; anything else is not a control.
fn hit_test(point: Vector2, dots: &[Vector2]) -> Option<Hit> {
    // Slightly generous target around each dot
    let reach = DOT_RADIUS * 1.5;
    if let Some(i) = dots
        .iter()
        .position(|c| (c.x - point.x).powi(2) + (c.y - point.y).powi(2) <= reach * reach)
    {
        return Some(Hit::Dot(i));
    }

    let zone = RENDER_WIDTH as f32 * ARROW_ZONE;
    if point.x < zone {
        Some(Hit::Prev)
    } else if point.x > RENDER_WIDTH as f32 - zone {
        Some(Hit::Next)
    } else {
        None
    }
}

/// Maps a window position onto the fixed-size render texture.
pub fn to_render_space(point: Vector2, screen_width: i32, screen_height: i32) -> Vector2 {
    if screen_width <= 0 || screen_height <= 0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width as f32,
        point.y * RENDER_HEIGHT as f32 / screen_height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centered_and_evenly_spaced() {
        let centers = dot_centers(3);
        assert_eq!(centers.len(), 3);
        assert_eq!(centers[1].x, RENDER_WIDTH as f32 * 0.5);
        assert_eq!(centers[2].x - centers[1].x, DOT_SPACING);
        assert!(centers.iter().all(|c| c.y == RENDER_HEIGHT as f32 - DOT_MARGIN));
    }

    #[test]
    fn no_slides_no_dots() {
        assert!(dot_centers(0).is_empty());
    }

    #[test]
    fn click_on_dot_selects_it() {
        let centers = dot_centers(4);
        assert_eq!(hit_test(centers[3], &centers), Some(Hit::Dot(3)));
    }

    #[test]
    fn edges_act_as_arrows() {
        let centers = dot_centers(4);
        assert_eq!(hit_test(Vector2::new(10.0, 500.0), &centers), Some(Hit::Prev));
        assert_eq!(hit_test(Vector2::new(RENDER_WIDTH as f32 - 10.0, 500.0), &centers), Some(Hit::Next));
        assert_eq!(hit_test(Vector2::new(RENDER_WIDTH as f32 * 0.5, 200.0), &centers), None);
    }

    #[test]
    fn window_coordinates_scale_to_render_space() {
        let p = to_render_space(Vector2::new(480.0, 270.0), RENDER_WIDTH / 2, RENDER_HEIGHT / 2);
        assert_eq!(p.x, 960.0);
        assert_eq!(p.y, 540.0);
    }
}
