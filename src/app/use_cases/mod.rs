//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod context_menu;
pub mod editing;
pub mod file_io;
pub mod modes;
pub mod selection;
pub mod viewport;
