mod image;
mod service;
