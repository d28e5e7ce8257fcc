// Service module exports

pub mod localization;
pub mod navigator;
pub mod settings;
