pub mod airport;

pub mod catalog_error;

pub mod geo_point;
