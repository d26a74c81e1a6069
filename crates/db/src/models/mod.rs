pub mod blog_post;
pub mod client;
pub mod expense;
pub mod gallery;
pub mod invoice;
pub mod lead;
pub mod project;
pub mod quotation;
pub mod review;
pub mod session;
pub mod team_member;
pub mod user;
