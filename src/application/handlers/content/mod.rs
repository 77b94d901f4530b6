//! Content query handlers: pages, overview, sections, navigation.

mod get_navigation;
mod get_overview;
mod get_section_page;
mod list_sections;

pub use get_navigation::GetNavigationHandler;
pub use get_overview::{GetOverviewHandler, OverviewData, SectionProgress};
pub use get_section_page::{GetSectionPageHandler, GetSectionPageQuery};
pub use list_sections::ListSectionsHandler;
