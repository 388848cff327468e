pub(crate) mod geometry;
pub(crate) mod model;
pub(crate) mod progress;
pub(crate) mod renderer;
pub(crate) mod scene;
pub(crate) mod scheduler;
pub(crate) mod visibility;
