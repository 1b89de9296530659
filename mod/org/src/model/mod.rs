mod company;
mod department;
mod job;

pub use company::*;
pub use department::*;
pub use job::*;
