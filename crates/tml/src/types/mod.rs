mod fragment;
mod value;

pub use fragment::Fragment;
pub use value::Value;
