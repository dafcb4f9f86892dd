//! XML utilities for reading registry responses.

mod utils;

pub use utils::{find_children, get_attribute, get_date_attribute, get_tag_name, has_tag};
