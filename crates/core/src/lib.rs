//! Domain logic for the Akrin bilingual site.
//!
//! Everything in this crate is pure and synchronous (apart from the
//! frontmatter directory scan): the route-alternate table, locale inference,
//! sitemap and robots generation, page metadata, static content, local SEO
//! analysis and form payloads.

pub mod content;
pub mod error;
pub mod forms;
pub mod frontmatter;
pub mod html;
pub mod locale;
pub mod metadata;
pub mod robots;
pub mod route_map;
pub mod seo;
pub mod site;
pub mod sitemap;
