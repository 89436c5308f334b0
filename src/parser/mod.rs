//! One extractor per portal page.
//!
//! Extractors are total functions from a parsed document to a record:
//! a missing root container yields an empty-shaped record and a missing
//! optional sub-node yields an empty string, because the portal
//! legitimately has periods with no data.

pub mod accordion;
pub mod assignments;
pub mod lunch_menu;
pub mod news;
pub mod results;
pub mod weekly_planning;
