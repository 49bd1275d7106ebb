pub mod generate_word_combinations;
pub use generate_word_combinations::generate_word_combinations;

pub mod normalize;
pub use normalize::{normalize, normalize_key};

pub mod read_source;
pub use read_source::{open_source, read_source_to_string};

pub mod remove_first_token_run;
pub use remove_first_token_run::remove_first_token_run;
