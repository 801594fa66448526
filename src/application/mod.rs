// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (read-side navigation state)
//! - [`viewer`]: The navigation and view-transform state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the [`viewer::Viewer`] and implements the
//!   [`port::Display`] port
//!
//! # Example
//!
//! ```no_run
//! use reid_lens::application::viewer::{Command, Viewer};
//! use reid_lens::infrastructure::image_rs::ImageRsBackend;
//! # use reid_lens::application::port::Display;
//! # use reid_lens::domain::status::{Placeholder, Status};
//! # use reid_lens::infrastructure::image_rs::Bitmap;
//! # struct Headless;
//! # impl Display<Bitmap> for Headless {
//! #     fn show(&mut self, _: &Bitmap) {}
//! #     fn show_placeholder(&mut self, _: Placeholder) {}
//! #     fn clear(&mut self) {}
//! #     fn set_status(&mut self, _: Status) {}
//! #     fn viewport_size(&self) -> Option<(u32, u32)> { None }
//! # }
//! # let mut display = Headless;
//!
//! let mut viewer = Viewer::new(ImageRsBackend::default());
//! viewer.handle(Command::SetRoot("/data/reid".into()), &mut display);
//! viewer.handle(Command::Next, &mut display);
//! ```

pub mod port;
pub mod query;
pub mod viewer;
