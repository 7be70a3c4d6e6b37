//! Page-side localization: the rendering surface abstraction, the
//! in-memory document, and the toggle service driving them.

pub mod document;
pub mod localize;
pub mod localizer;
pub mod notice;
pub mod surface;

pub use document::{Document, ElementSpec, PageSpec};
pub use localize::{apply_to, ApplyReport};
pub use localizer::{LocalizationToggle, PageSettings};
pub use notice::TransientMessage;
pub use surface::{LocalizableElement, NodeId, Surface, Target, TitleSource, Variants};

use std::sync::{Mutex, MutexGuard};

pub(crate) fn lock_surface<S>(surface: &Mutex<S>) -> MutexGuard<'_, S> {
    match surface.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Surface lock poisoned, recovering...");
            poisoned.into_inner()
        }
    }
}
