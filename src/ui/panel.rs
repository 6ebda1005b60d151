// SPDX-License-Identifier: MPL-2.0
//! Full-window panels and their frame computation.
//!
//! A panel temporarily replaces the scrolling home layout. Its frame (top
//! offset and height) is always derived from the live header height and the
//! current window height, never cached between recomputations: a hidden
//! panel is kept correctly sized so it is already in place if it becomes
//! active.

/// Full-window panels reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Portfolio,
    Packages,
}

impl Panel {
    /// All panels, in navigation order.
    pub const ALL: [Panel; 2] = [Panel::Portfolio, Panel::Packages];
}

/// Placement of a panel below the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Offset from the top of the window, equal to the header height.
    pub top: f32,
    /// Remaining window height below the header.
    pub height: f32,
}

impl Frame {
    /// Computes a frame from the current header height and window height.
    #[must_use]
    pub fn compute(header_height: f32, viewport_height: f32) -> Self {
        Self {
            top: header_height,
            height: (viewport_height - header_height).max(0.0),
        }
    }
}

/// One frame per member of [`Panel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frames {
    portfolio: Frame,
    packages: Frame,
}

impl Frames {
    /// Computes frames for every panel.
    #[must_use]
    pub fn new(header_height: f32, viewport_height: f32) -> Self {
        let frame = Frame::compute(header_height, viewport_height);
        Self {
            portfolio: frame,
            packages: frame,
        }
    }

    /// Returns the frame for one panel.
    #[must_use]
    pub fn get(&self, panel: Panel) -> Frame {
        match panel {
            Panel::Portfolio => self.portfolio,
            Panel::Packages => self.packages,
        }
    }

    /// Replaces the frame for one panel.
    pub fn set(&mut self, panel: Panel, frame: Frame) {
        match panel {
            Panel::Portfolio => self.portfolio = frame,
            Panel::Packages => self.packages = frame,
        }
    }

    /// Recomputes every panel's frame, visible or not.
    pub fn recompute_all(&mut self, header_height: f32, viewport_height: f32) {
        for panel in Panel::ALL {
            self.set(panel, Frame::compute(header_height, viewport_height));
        }
    }
}
