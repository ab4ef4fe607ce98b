pub mod detail_panel;
pub mod header;
pub mod layout;
pub mod notifications;
pub mod search_box;
pub mod status_bar;
pub mod test_list;
pub mod theme;

pub use layout::draw;
