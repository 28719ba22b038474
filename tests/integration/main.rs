mod errors;
mod show;
mod utils;
