pub mod auth;
pub mod blog_posts;
pub mod clients;
pub mod expenses;
pub mod galleries;
pub mod invoices;
pub mod leads;
pub mod projects;
pub mod quotations;
pub mod reviews;
pub mod team_members;
pub mod users;
