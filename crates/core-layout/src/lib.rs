//! Single-box layout primitive for terminal views.
//!
//! A `Container` wraps exactly one child with padding, optional borders, a
//! max-width clamp, an alignment hint and focus delegation. It is not a layout
//! engine: there is no distribution among siblings and no wrapping. Parents
//! compose containers by nesting them, since a container exposes every
//! capability it consumes.
//!
//! Capability model:
//! * `View` is mandatory for a child; `Sizeable`, `Focusable` and `Model` are
//!   optional and discovered through `View::as_*` probes at each call site.
//! * `Alignable` and `Positionable` are exposed by the container for a parent
//!   compositor; the container never acts on its own alignment or position.
//!
//! Threading: single-threaded. Views are not required to be `Send`; the owning
//! control loop drives every call synchronously.

mod capability;
mod container;
mod label;
pub mod options;

pub use capability::{Alignable, Focusable, Model, Positionable, Sizeable, View};
pub use container::Container;
pub use label::Label;
pub use options::{ContainerConfig, ContainerOption};
