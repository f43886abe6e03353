mod blogs;
pub use blogs::Blogs;
