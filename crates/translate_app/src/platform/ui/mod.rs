pub(crate) mod constants;
pub(crate) mod fonts;
pub(crate) mod render;
