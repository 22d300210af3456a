use std::time::Duration;

use tracing::debug;

use crate::autoplay::Autoplay;
use crate::render::RenderTarget;

/// Keeps exactly one of `len` slides active and mirrors it onto a [`RenderTarget`].
///
/// Manual navigation and autoplay share the same index. A manual move does
/// not restart the autoplay countdown.
#[derive(Debug)]
pub struct Carousel<R: RenderTarget> {
    target: R,
    len: usize,
    current: usize,
    autoplay: Option<Autoplay>,
}

impl<R: RenderTarget> Carousel<R> {
    /// Takes ownership of `target` and shows its first slide.
    pub fn new(target: R) -> Self {
        let len = target.slide_count();
        let mut carousel = Self {
            target,
            len,
            current: 0,
            autoplay: None,
        };
        carousel.render();
        carousel
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active slide, or `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Jumps to `index`. Indices outside `0..len` are skipped silently.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.current = index;
        debug!(current = self.current, "go to slide");
        self.render();
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
        debug!(current = self.current, "next slide");
        self.render();
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        // Bias by len so the operand never goes below zero.
        self.current = (self.current + self.len - 1) % self.len;
        debug!(current = self.current, "previous slide");
        self.render();
    }

    /// Deactivates everything, then activates the current slide and its indicator.
    pub fn render(&mut self) {
        self.target.deactivate_all();
        if self.len > 0 {
            self.target.activate(self.current);
        }
    }

    /// Schedules `next()` every `interval`, first firing one interval from now.
    ///
    /// Returns `false` without scheduling when there is at most one slide or
    /// the interval is zero. Calling it while running restarts the countdown.
    pub fn start_autoplay(&mut self, interval: Duration) -> bool {
        if self.len <= 1 || interval.is_zero() {
            debug!(len = self.len, ?interval, "autoplay not scheduled");
            return false;
        }
        debug!(?interval, "autoplay started");
        self.autoplay = Some(Autoplay::new(interval));
        true
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            debug!("autoplay stopped");
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref()
    }

    /// Feeds elapsed frame time to the autoplay timer and steps forward once
    /// per completed period, rendering a single time. Returns the period count.
    pub fn update(&mut self, dt: Duration) -> u64 {
        let fired = match self.autoplay.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return 0,
        };
        if fired > 0 {
            self.advance(fired);
        }
        fired
    }

    fn advance(&mut self, steps: u64) {
        if self.len == 0 {
            return;
        }
        let steps = (steps % self.len as u64) as usize;
        self.current = (self.current + steps) % self.len;
        debug!(current = self.current, "autoplay advanced");
        self.render();
    }
}
