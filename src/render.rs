pub(crate) mod cpu;
pub(crate) mod gradient;
pub(crate) mod surface;
pub(crate) mod text;
