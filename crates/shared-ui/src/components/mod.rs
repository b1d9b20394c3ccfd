// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod switch;
pub mod tabs;

// Depends on the sidebar context only
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use sidebar::*;
pub use switch::*;
pub use tabs::*;

use dioxus::prelude::*;

/// Prepend a base class to caller-supplied attributes.
pub(crate) fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}
