//! Editing coordination for the manos HTML editor.
//!
//! The browser engine owns the document, its selection and its undo history.
//! This crate only decides which editing commands to send it, keeps the toolbar
//! in step with the engine's answers, mirrors the document into the source view,
//! and tracks the file the document belongs to.

mod color;
mod command;
mod config;
mod controller;
mod dispatch;
mod engine;
mod error;
pub mod script;
mod session;
mod source_view;
mod toolbar;
mod url_guess;
mod zoom;

pub use crate::color::*;
pub use crate::command::*;
pub use crate::config::*;
pub use crate::controller::*;
pub use crate::dispatch::*;
pub use crate::engine::*;
pub use crate::error::*;
pub use crate::session::*;
pub use crate::source_view::*;
pub use crate::toolbar::*;
pub use crate::url_guess::*;
pub use crate::zoom::*;
