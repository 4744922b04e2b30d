mod alternatives;
mod common;
mod scoring;
mod selection;
