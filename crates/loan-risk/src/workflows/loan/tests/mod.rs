mod common;
mod rules;
mod transcript;
