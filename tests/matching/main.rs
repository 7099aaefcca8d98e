mod errors;
mod properties;
