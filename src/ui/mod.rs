// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens and panels
//!
//! - [`home`] - Scrolling landing page with hero, gallery and contact sections
//! - [`portfolio`] - Full-window portfolio panel
//! - [`packages`] - Full-window packages panel with collapsible details
//! - [`lightbox`] - Full-window image preview overlay
//!
//! # Shared Infrastructure
//!
//! - [`gallery`] - Photo scanning and thumbnail grids
//! - [`navbar`] - Header bar with the navigation links
//! - [`panel`] - Panel identifiers and frame computation
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod packages;
pub mod panel;
pub mod portfolio;
pub mod styles;
pub mod theming;
