/// Surface a [`Carousel`](crate::Carousel) projects its active index onto.
///
/// Implementations own the slide and indicator handles. `activate` must
/// skip silently when there is no slide or indicator at `index`.
pub trait RenderTarget {
    fn slide_count(&self) -> usize;
    fn deactivate_all(&mut self);
    fn activate(&mut self, index: usize);
}

/// Headless render target: one active flag per slide and per indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<bool>,
    indicators: Vec<bool>,
}

impl Deck {
    /// A deck with one indicator per slide.
    pub fn new(slides: usize) -> Self {
        Self::with_indicators(slides, slides)
    }

    /// Slides and indicators are counted separately; a page may ship fewer dots than slides.
    pub fn with_indicators(slides: usize, indicators: usize) -> Self {
        Self {
            slides: vec![false; slides],
            indicators: vec![false; indicators],
        }
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|active| *active)
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }

    pub fn active_slide_count(&self) -> usize {
        self.slides.iter().filter(|active| **active).count()
    }

    pub fn active_indicator_count(&self) -> usize {
        self.indicators.iter().filter(|active| **active).count()
    }
}

impl RenderTarget for Deck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn deactivate_all(&mut self) {
        self.slides.iter_mut().for_each(|s| *s = false);
        self.indicators.iter_mut().for_each(|d| *d = false);
    }

    fn activate(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = true;
        }
        if let Some(dot) = self.indicators.get_mut(index) {
            *dot = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_marks_slide_and_indicator() {
        let mut deck = Deck::new(3);
        deck.activate(2);
        assert_eq!(deck.active_slide(), Some(2));
        assert_eq!(deck.active_indicator(), Some(2));
    }

    #[test]
    fn activate_skips_missing_indicator() {
        let mut deck = Deck::with_indicators(4, 2);
        deck.activate(3);
        assert_eq!(deck.active_slide(), Some(3));
        assert_eq!(deck.active_indicator(), None);
    }

    #[test]
    fn activate_out_of_range_is_silent() {
        let mut deck = Deck::new(2);
        deck.activate(7);
        assert_eq!(deck.active_slide_count(), 0);
        assert_eq!(deck.active_indicator_count(), 0);
    }

    #[test]
    fn deactivate_all_clears_everything() {
        let mut deck = Deck::new(3);
        deck.activate(0);
        deck.activate(1);
        deck.deactivate_all();
        assert_eq!(deck.active_slide_count(), 0);
        assert_eq!(deck.active_indicator_count(), 0);
    }
}
