pub mod page_header;
pub mod resource_list;
pub mod ui;

pub use page_header::PageHeader;
pub use resource_list::ResourceList;
