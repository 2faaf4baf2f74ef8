mod catalog;
mod config;
mod divination;
