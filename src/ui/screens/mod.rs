pub(crate) mod history;
pub(crate) mod overview;
pub(crate) mod settings;
