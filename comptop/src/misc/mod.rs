mod index_list;
mod memo;

pub use index_list::*;
pub use memo::*;
