pub mod client;

pub use client::ScreenerClient;
