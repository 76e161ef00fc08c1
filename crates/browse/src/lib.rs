//! Presentation helpers over catalog listings: name search, alphabetical
//! ordering and sectioning, icon tokens, and a reloadable [`Listing`].
//!
//! Nothing here touches widgets; a host maps these values onto its own
//! table and search controls.

mod icons;
mod listing;
mod search;
mod sections;

pub use icons::icon_token;
pub use listing::Listing;
pub use search::{compare_names, filter_by_name, sort_by_name};
pub use sections::{
    SECTION_INDEX_TITLES, Section, section_for_index_title, section_index, sections,
};
