pub(crate) mod index_listing;
