mod show;

pub use show::{find_show_by_name, list_show_names, ShowRecord};
