pub mod client;

pub use client::HoyolabClient;
