pub mod reloader;
