// ABOUTME: Built-in tool implementations.
// ABOUTME: WeatherTool is the only capability registered by default.

mod weather;

pub use weather::*;
