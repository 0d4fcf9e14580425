//! Configuration section definitions.

mod head;
mod theme;

pub use head::HeadTag;
pub use theme::{LinkTarget, NavItem, NavLink, Sidebar, SidebarChild, SidebarGroup, ThemeConfig};
