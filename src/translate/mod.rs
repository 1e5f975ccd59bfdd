// Translation provider abstraction

pub mod provider;
pub mod google;

pub use google::GoogleTranslateAdapter;
pub use provider::*;
