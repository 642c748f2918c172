mod library;
mod org;
mod study;
mod transport;
