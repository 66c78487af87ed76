//! # Wish Drift
//!
//! A looping 3D greeting scene built with Rust: textured image panels and
//! text sprites drift toward the camera, fade in and out, and recycle
//! indefinitely.
//!
//! ## Features
//!
//! - **Particle Pool**: Fixed-size pool of recyclable panels, never
//!   allocated after startup
//! - **Frame Scheduling**: Simulation decoupled from the display-refresh API
//!   behind a single `advance_frame()` entry point
//! - **Device Classes**: Compact/standard sizing, camera and font parameters
//!   decided once at startup from the viewport width
//! - **Collaborator Seams**: Scene graph, texture loading and text
//!   rasterization live behind traits; the core only mutates transforms and
//!   opacity
//!
//! ## Architecture Design
//!
//! The scene is deliberately flat: an [`scene::ObjectFactory`] constructs
//! particles once, a [`scene::ParticleSimulator`] owns the pool and is the
//! only mutator afterwards. Everything else is wiring.
//!
//! ### Example
//!
//! ```no_run
//! use wish_drift::core::Engine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Engine::run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Engine entry point, frame scheduler and error types
//! - [`config`]: Scene configuration (display, camera, content, logging)
//! - [`scene`]: Particle data model, factory and simulator
//! - [`render`]: Scene graph / texture / text collaborator seams
//! - [`platform`]: Window abstraction over winit

/// Core functionality: engine entry point, frame scheduler, errors
pub mod core;
/// Scene configuration loaded at startup
pub mod config;
/// Particle data model, factory and simulator
pub mod scene;
/// Rendering collaborator seams (scene graph, textures, text)
pub mod render;
/// Platform abstraction layer (windowing)
pub mod platform;
