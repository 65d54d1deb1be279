mod progress;
mod summary;
