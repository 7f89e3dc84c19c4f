//! Lancette — analog clock face geometry and draw-stream renderer.
//!
//! The face is a pure function of (wall-clock time, surface metrics): each
//! frame it converts the time into three hand rotations, rebuilds the hand
//! outlines from the surface radius, and records renderer-agnostic draw
//! commands into a [`scene::DrawList`]. The host owns the window, the
//! rasterizer, and the redraw trigger; see [`time::FrameClock`] for the
//! driver contract.

pub mod config;
pub mod coords;
pub mod face;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
