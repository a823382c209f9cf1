//! Conversions from decoded responses into external data containers.

pub mod dataframe;
