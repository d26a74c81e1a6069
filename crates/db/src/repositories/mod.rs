mod blog_post_repo;
mod client_repo;
mod expense_repo;
mod gallery_repo;
mod invoice_repo;
mod lead_repo;
mod project_repo;
mod quotation_repo;
mod review_repo;
mod session_repo;
mod team_member_repo;
mod user_repo;

pub use blog_post_repo::BlogPostRepo;
pub use client_repo::ClientRepo;
pub use expense_repo::ExpenseRepo;
pub use gallery_repo::GalleryRepo;
pub use invoice_repo::InvoiceRepo;
pub use lead_repo::LeadRepo;
pub use project_repo::ProjectRepo;
pub use quotation_repo::QuotationRepo;
pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
