pub mod support;

mod all_pairs;
mod errors;
mod metrics;
mod path;
mod shortest;
mod stations;
