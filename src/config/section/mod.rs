//! Configuration section definitions.
//!
//! Each module corresponds to a part of `sidelight.toml`:
//!
//! | Module        | TOML Section               | Purpose                       |
//! |---------------|----------------------------|-------------------------------|
//! | `integration` | `[[integrations]]`         | Tagged integration entries    |
//! | `social`      | `[[integrations.social]]`  | Header social links           |
//! | `sidebar`     | `[[integrations.sidebar]]` | Sidebar navigation sections   |

pub mod integration;
pub mod sidebar;
pub mod social;

// Re-export section configs
pub use integration::{DocsConfig, Integration};
pub use sidebar::{Autogenerate, SidebarEntry, SidebarSection};
pub use social::{KNOWN_ICONS, SocialLink};
