pub mod rental_api;
