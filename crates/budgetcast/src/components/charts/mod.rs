//! Chart components for data visualization.

mod forecast;

pub use forecast::ForecastChart;
