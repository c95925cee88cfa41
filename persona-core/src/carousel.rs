//! Hero image carousel with interval autoplay.
use crate::mode::PresentationMode;

/// Draws the carousel for a given active slide.
pub trait SlideRenderer {
    /// Number of images in the carousel.
    fn image_count(&self) -> usize;

    /// Show image `active` at full opacity, hide the others, and mark only the
    /// matching indicator as active.
    fn render(&mut self, active: usize);
}

/// A cancellable repeating trigger for [`CarouselEngine::advance`].
pub trait AutoplayTimer {
    /// Arm a repeating trigger with the given period.
    fn arm(&mut self, period_ms: u32);

    /// Cancel the outstanding trigger, if any.
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    Idle,
    Running,
}

pub struct CarouselEngine<R, T> {
    renderer: R,
    timer: T,
    period_ms: u32,
    current: usize,
    state: AutoplayState,
}

impl<R, T> CarouselEngine<R, T>
where
    R: SlideRenderer,
    T: AutoplayTimer,
{
    pub const fn new(renderer: R, timer: T, period_ms: u32) -> Self {
        Self {
            renderer,
            timer,
            period_ms,
            current: 0,
            state: AutoplayState::Idle,
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn state(&self) -> AutoplayState {
        self.state
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.renderer.image_count()
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Make `index` the active slide. Callers pass indices below [`Self::count`].
    pub fn show_slide(&mut self, index: usize) {
        self.renderer.render(index);
        self.current = index;
        log::debug!("carousel: slide {index}");
    }

    /// Step to the next slide, wrapping at the end.
    pub fn advance(&mut self, mode: PresentationMode) {
        let count = self.count();
        if mode.is_dj() || count <= 1 {
            return;
        }
        self.show_slide((self.current + 1) % count);
    }

    /// (Re)start autoplay. Any running timer is cancelled first, so at most
    /// one trigger is ever outstanding.
    pub fn start(&mut self, mode: PresentationMode) {
        self.stop();
        if mode.is_dj() || self.count() <= 1 {
            return;
        }
        self.timer.arm(self.period_ms);
        self.state = AutoplayState::Running;
    }

    pub fn stop(&mut self) {
        if self.state == AutoplayState::Running {
            self.timer.cancel();
        }
        self.state = AutoplayState::Idle;
    }

    /// Back to the first slide, as on every mode change.
    pub fn reset(&mut self) {
        self.current = 0;
        self.show_slide(0);
    }

    /// Indicator click: jump to `index` and restart the autoplay period.
    pub fn select(&mut self, index: usize, mode: PresentationMode) {
        if index >= self.count() {
            return;
        }
        self.show_slide(index);
        self.start(mode);
    }
}
