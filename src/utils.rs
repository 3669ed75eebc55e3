pub mod canonicalize_tag;
pub use canonicalize_tag::canonicalize_tag;

pub mod count_tag_frequencies;
pub use count_tag_frequencies::count_tag_frequencies;

pub mod sort_results;
pub use sort_results::sort_results;
