//! Mobile navigation menu state.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the menu was followed.
    pub const fn close(&mut self) {
        self.open = false;
    }
}
