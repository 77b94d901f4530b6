//! Render module - Cards, section layouts, and composed pages.
//!
//! Pure projections from normalized records into display structures.
//! Nothing here performs I/O or carries state; the same inputs always
//! produce the same output.

mod card;
mod layout;
mod page;

pub use card::{render_record, Card, CardStyle};
pub use layout::{assemble_section, SectionLayout, EMPTY_SECTION_MESSAGE};
pub use page::{Page, PageText, ProseBlock};
