// SPDX-License-Identifier: MPL-2.0
//! `iced_atelier` is a photography-studio showcase and gallery kiosk built
//! with the Iced GUI framework.
//!
//! It shows a scrolling landing page with a photo gallery, full-window
//! portfolio and packages panels, and a lightbox image preview, and
//! demonstrates internationalization with Fluent together with user
//! preference management and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
