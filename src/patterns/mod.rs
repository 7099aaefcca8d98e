// Pattern compilation helpers shared by the recognizers

#[macro_use]
mod cache;

pub(crate) use cache::*;
