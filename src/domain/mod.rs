// Domain layer - Payload model, formatting and view shaping
pub mod charts;
pub mod format;
pub mod navigation;
pub mod payload;
pub mod theme;
