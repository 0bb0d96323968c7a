mod try_;

pub use try_::Try;
