pub mod links;
pub mod panel;
pub mod token;
pub mod truncate;
pub mod view;

pub use links::{build_resource_links, ResourceKind, ResourceLink};
pub use panel::{AboutPanel, NO_INFO_PLACEHOLDER};
pub use token::{TokenFile, TokenProfile};
pub use truncate::{truncate, truncate_description, Truncation, TRUNCATE_CHARACTER_COUNT};
pub use view::DescriptionView;
