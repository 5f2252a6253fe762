//! Application-Layer: Editing-Surface, Intents und Scene-Builder.
//!
//! Rohes Input-Handling und Zeichnen liegen beim Host. Dieser Layer bekommt
//! bereits ausgewertete Intents und liefert eine darstellbare `PathScene`.

pub mod controller;
pub mod events;
pub mod render_scene;

pub use controller::PathEditor;
pub use events::{EditOutcome, PathHandle, PathIntent};
pub use render_scene::SceneOptions;
