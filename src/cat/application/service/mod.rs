pub mod cat_service;
