use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use carousel::config::Args;
use carousel::constants::*;
use carousel::images::load_sorted_image_paths;
use carousel::{Carousel, Theme, ThemeStore};

mod slide;
mod texture_loader;
mod viewer;

use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::viewer::{to_render_space, Hit, SlideDeck};

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut image_paths = load_sorted_image_paths(&args.image_directory)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(dir = %args.image_directory.display(), count = image_paths.len(), "loading slides");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping slide: {e:#}"),
        }
    }
    if slides.is_empty() {
        bail!("No slides were loaded from {}", args.image_directory.display());
    }

    let theme_store = ThemeStore::new(&args.theme_file);
    let mut theme = theme_store.load().unwrap_or_else(|e| {
        warn!("using default theme: {e}");
        Theme::default()
    });

    let mut carousel = Carousel::new(SlideDeck::new(slides));
    carousel.start_autoplay(args.autoplay_interval());

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {e}"))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.prev();
        }
        for (index, key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                carousel.go_to(index);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = to_render_space(rl.get_mouse_position(), rl.get_screen_width(), rl.get_screen_height());
            match carousel.target().hit(point) {
                Some(Hit::Prev) => carousel.prev(),
                Some(Hit::Next) => carousel.next(),
                Some(Hit::Dot(index)) => carousel.go_to(index),
                None => {}
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if carousel.is_autoplaying() {
                carousel.stop_autoplay();
            } else {
                carousel.start_autoplay(args.autoplay_interval());
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            theme = theme.toggled();
            info!(%theme, "theme changed");
            if let Err(e) = theme_store.save(theme) {
                warn!("{e}");
            }
        }

        // --- Update Logic ---
        carousel.update(dt);

        // --- Render into the fixed size framebuffer ---
        let deck = carousel.target();
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            deck.draw(&mut d, theme);
        });

        // Render texture is stored upside down, flip it while scaling to the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    carousel.stop_autoplay();
    info!("carousel closed");
    Ok(())
}
