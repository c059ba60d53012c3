pub mod loader;
pub mod navbar;
pub mod page;
pub mod toast;

pub use loader::LoaderOverlay;
pub use navbar::Navbar;
pub use page::Page;
pub use toast::ToastContainer;
