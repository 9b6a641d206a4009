//! Runtime configuration.
//!
//! Nanny has no configuration file. Everything it needs beyond its
//! arguments comes from the process environment, resolved once into
//! [`Settings`].

pub mod settings;

pub use settings::{
    Settings, ENV_DISPLAY, ENV_LEGAL_DOC_NAME, ENV_NO_COLOR, ENV_WAYLAND_DISPLAY,
};
