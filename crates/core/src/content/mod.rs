//! Static site content: blog posts and case studies.

pub mod blog;
pub mod case_studies;

pub use blog::{BlogPost, blog_posts, find_post};
pub use case_studies::{CaseStudy, CASE_STUDIES, case_study_hero, find_case_study};
