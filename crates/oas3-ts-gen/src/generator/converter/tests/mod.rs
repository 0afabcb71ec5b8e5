mod content;
mod operations;
mod refs;
