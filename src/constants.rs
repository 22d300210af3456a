pub const RENDER_WIDTH: i32 = 1920;                     // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;                    // Height of the render texture
pub const FPS: u32 = 60;                                // Frames per second

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 10_000;   // Time between automatic advances (milliseconds)
pub const DEFAULT_THEME_FILE: &str = ".carousel-theme"; // Where the selected theme is remembered

pub const SLIDE_FIT: f32 = 0.9;                         // Largest share of the screen a slide may cover
pub const ARROW_ZONE: f32 = 0.1;                        // Share of screen width that acts as a prev/next arrow
pub const DOT_RADIUS: f32 = 9.0;                        // Indicator dot radius (render pixels)
pub const DOT_SPACING: f32 = 32.0;                      // Distance between indicator centers (render pixels)
pub const DOT_MARGIN: f32 = 48.0;                       // Distance of the dot row from the bottom edge
