pub(crate) mod cascade;
